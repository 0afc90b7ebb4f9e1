//! # linkdoc-writer
//!
//! Assembles [`linkdoc_resource::Resource`] descriptors into normalized,
//! hyperlinked documents.
//!
//! A written document has up to three sections:
//!
//! - `links`: the resource's link templates, keyed by template key
//! - `<collection>`: one document per entity, each with its relationship links
//! - `linked`: every related entity exactly once, grouped by collection
//!
//! ## Example
//!
//! ```
//! use linkdoc_resource::{Attributes, Entity, Identifier, Related, Relation, Resource, ResourceMeta};
//! use linkdoc_writer::{LinkForm, WriterConfig, write};
//! use serde_json::json;
//!
//! struct Author {
//!     id: i64,
//! }
//!
//! impl Entity for Author {
//!     fn id(&self) -> Option<Identifier> {
//!         Some(self.id.into())
//!     }
//!
//!     fn attributes(&self) -> Attributes {
//!         Attributes::new()
//!     }
//! }
//!
//! struct Post {
//!     id: i64,
//!     author: Author,
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
//! let authors = ResourceMeta::new("authors")
//!     .unwrap()
//!     .with_name("author")
//!     .with_href("/authors/{authors.id}")
//!     .unwrap();
//!
//! let posts = Resource::builder("posts")
//!     .entity(Post { id: 1, author: Author { id: 100 } })
//!     .relation(Relation::to_one(&authors, |post: &Post| Related::one(&post.author)))
//!     .build()
//!     .unwrap();
//!
//! let config = WriterConfig::default().with_link_form(LinkForm::Id);
//! let document = write(&posts, &config).unwrap();
//!
//! assert_eq!(
//!     document.to_value().unwrap(),
//!     json!({
//!         "posts": [{"id": "1", "links": {"author": "100"}}],
//!         "linked": {"authors": [{"id": "100", "href": "/authors/100"}]}
//!     })
//! );
//! ```
//!
//! ## Logging
//!
//! The writer emits `tracing` events and never installs a subscriber.

pub mod config;
pub mod document;
pub mod error;
pub mod writer;

pub use config::{LinkForm, WriterConfig};
pub use document::{Document, LinkObject, LinkValue, Linkage, ResourceDocument, TemplateLink};
pub use error::{ConfigError, Result, WriterError};
pub use writer::{Writer, write};
