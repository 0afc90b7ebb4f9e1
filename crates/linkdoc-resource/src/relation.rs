//! Relation descriptors - typed references from one resource to another
//!
//! A relation snapshots the target resource's name, collection name and href
//! pattern when it is created, and carries the accessor that yields the related
//! entities of a source entity. Accessors are registered up front instead of
//! being looked up by name while rendering.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::entity::Related;
use crate::href::HrefPattern;
use crate::resource::ResourceMeta;

/// Arity of a relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationKind {
	ToOne,
	ToMany,
}

impl fmt::Display for RelationKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			RelationKind::ToOne => f.write_str("toOne"),
			RelationKind::ToMany => f.write_str("toMany"),
		}
	}
}

/// Function yielding the entities related to a source entity.
pub type Accessor<E> = Arc<dyn for<'a> Fn(&'a E) -> Related<'a> + Send + Sync>;

/// A relation from entities of type `E` to another resource's collection.
///
/// # Examples
///
/// ```
/// use linkdoc_resource::{Attributes, Entity, Identifier, Related, Relation, ResourceMeta};
///
/// struct Author {
///     id: i64,
/// }
///
/// impl Entity for Author {
///     fn id(&self) -> Option<Identifier> {
///         Some(self.id.into())
///     }
///
///     fn attributes(&self) -> Attributes {
///         Attributes::new()
///     }
/// }
///
/// struct Post {
///     author: Option<Author>,
/// }
///
/// let authors = ResourceMeta::new("authors")
///     .unwrap()
///     .with_name("author")
///     .with_href("/authors/{authors.id}")
///     .unwrap();
///
/// let relation = Relation::to_one(&authors, |post: &Post| Related::optional(post.author.as_ref()));
///
/// assert_eq!(relation.key(), "author");
/// assert_eq!(relation.collection_name(), "authors");
/// ```
pub struct Relation<E> {
	kind: RelationKind,
	target: ResourceMeta,
	accessor: Accessor<E>,
}

impl<E> Relation<E> {
	/// Creates a relation of the given kind to `target`.
	pub fn new<F>(kind: RelationKind, target: impl AsRef<ResourceMeta>, accessor: F) -> Self
	where
		F: for<'a> Fn(&'a E) -> Related<'a> + Send + Sync + 'static,
	{
		Self {
			kind,
			target: target.as_ref().clone(),
			accessor: Arc::new(accessor),
		}
	}

	/// Creates a to-one relation. The accessor should yield a single entity or none.
	pub fn to_one<F>(target: impl AsRef<ResourceMeta>, accessor: F) -> Self
	where
		F: for<'a> Fn(&'a E) -> Related<'a> + Send + Sync + 'static,
	{
		Self::new(RelationKind::ToOne, target, accessor)
	}

	/// Creates a to-many relation.
	pub fn to_many<F>(target: impl AsRef<ResourceMeta>, accessor: F) -> Self
	where
		F: for<'a> Fn(&'a E) -> Related<'a> + Send + Sync + 'static,
	{
		Self::new(RelationKind::ToMany, target, accessor)
	}

	pub fn kind(&self) -> RelationKind {
		self.kind
	}

	pub fn is_to_one(&self) -> bool {
		self.kind == RelationKind::ToOne
	}

	pub fn is_to_many(&self) -> bool {
		self.kind == RelationKind::ToMany
	}

	/// Singular name of the target resource.
	pub fn name(&self) -> &str {
		self.target.name()
	}

	/// Collection name of the target resource.
	pub fn collection_name(&self) -> &str {
		self.target.collection_name()
	}

	/// Href pattern of the target resource.
	pub fn href(&self) -> Option<&HrefPattern> {
		self.target.href()
	}

	pub fn target(&self) -> &ResourceMeta {
		&self.target
	}

	/// Key the relation is rendered under in a document's `links` map:
	/// the singular name for to-one, the collection name for to-many.
	pub fn key(&self) -> &str {
		match self.kind {
			RelationKind::ToOne => self.name(),
			RelationKind::ToMany => self.collection_name(),
		}
	}

	/// Entities related to `entity`.
	pub fn resolve<'a>(&self, entity: &'a E) -> Related<'a> {
		(self.accessor)(entity)
	}
}

impl<E> Clone for Relation<E> {
	fn clone(&self) -> Self {
		Self {
			kind: self.kind,
			target: self.target.clone(),
			accessor: Arc::clone(&self.accessor),
		}
	}
}

impl<E> fmt::Debug for Relation<E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Relation")
			.field("kind", &self.kind)
			.field("target", &self.target)
			.finish_non_exhaustive()
	}
}
