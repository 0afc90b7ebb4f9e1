//! # linkdoc
//!
//! Normalized, hyperlinked JSON-API style documents from in-memory entity graphs.
//!
//! linkdoc turns a collection of domain entities, the relations between them
//! and a handful of URL patterns into a document with three sections: the
//! primary collection, per-document relationship links, and a deduplicated
//! `linked` side-table of everything those links point to.
//!
//! The writer never fetches data. It renders what is already in memory.
//!
//! ## Feature Flags
//!
//! - `writer` (default) - the document assembly engine (`linkdoc-writer`)
//!
//! Without `writer` only the descriptor model is available.
//!
//! ## Quick Example
//!
//! ```rust
//! use linkdoc::prelude::*;
//! use serde_json::json;
//!
//! struct Comment {
//!     id: u32,
//!     body: &'static str,
//! }
//!
//! impl Entity for Comment {
//!     fn id(&self) -> Option<Identifier> {
//!         Some(self.id.into())
//!     }
//!
//!     fn attributes(&self) -> Attributes {
//!         let mut attributes = Attributes::new();
//!         attributes.insert("body".to_string(), json!(self.body));
//!         attributes
//!     }
//! }
//!
//! struct Post {
//!     id: u32,
//!     comments: Vec<Comment>,
//! }
//!
//! impl Entity for Post {
//!     fn id(&self) -> Option<Identifier> {
//!         Some(self.id.into())
//!     }
//!
//!     fn attributes(&self) -> Attributes {
//!         Attributes::new()
//!     }
//! }
//!
//! let comments = ResourceMeta::new("comments")
//!     .unwrap()
//!     .with_name("comment")
//!     .with_href("/posts/{posts.id}/comments/{comments.id}")
//!     .unwrap();
//!
//! let posts = Resource::builder("posts")
//!     .name("post")
//!     .href("/posts/{posts.id}")
//!     .entity(Post {
//!         id: 1,
//!         comments: vec![Comment { id: 11, body: "first" }, Comment { id: 12, body: "second" }],
//!     })
//!     .relation(Relation::to_many(&comments, |post: &Post| Related::many(post.comments.iter())))
//!     .build()
//!     .unwrap();
//!
//! let document = Writer::default().write(&posts).unwrap();
//! let value = document.to_value().unwrap();
//!
//! assert_eq!(value["posts"][0]["links"]["comments"]["href"], "/posts/1/comments/11,12");
//! assert_eq!(value["linked"]["comments"][1]["body"], "second");
//! ```

pub mod resource;
#[cfg(feature = "writer")]
pub mod writer;

// Re-export descriptors
pub use linkdoc_resource::{
	Attributes, Entity, Identifier, LinkTemplate, Related, Relation, RelationKind, Resource,
	ResourceBuilder, ResourceError, ResourceMeta,
};

// Re-export the writer
#[cfg(feature = "writer")]
pub use linkdoc_writer::{Document, LinkForm, Writer, WriterConfig, WriterError, write};

/// Prelude module for convenient imports
///
/// Import everything needed to describe and write resources:
///
/// ```rust
/// use linkdoc::prelude::*;
/// ```
pub mod prelude {
	pub use crate::{
		Attributes, Entity, Identifier, LinkTemplate, Related, Relation, RelationKind, Resource,
		ResourceMeta,
	};

	#[cfg(feature = "writer")]
	pub use crate::{Document, LinkForm, Writer, WriterConfig};
}
