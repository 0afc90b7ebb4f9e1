//! Resource descriptors - the configuration root handed to the writer
//!
//! A [`Resource`] describes one primary collection: its entities, the relations
//! from those entities to other collections, and the link templates rendered in
//! the document's top-level `links`. Resources are immutable once built; build
//! them with [`Resource::builder`].

use std::collections::HashSet;

use crate::entity::Entity;
use crate::error::{ResourceError, Result};
use crate::href::{HrefPattern, parse_configured};
use crate::relation::Relation;
use crate::template::LinkTemplate;

/// Top-level document sections a primary collection cannot be named after.
pub const RESERVED_COLLECTION_NAMES: [&str; 2] = ["links", "linked"];

/// Identity of a resource: singular name, collection name and href pattern.
///
/// Relations copy the meta of their target when they are created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceMeta {
	name: String,
	collection_name: String,
	href: Option<HrefPattern>,
}

impl ResourceMeta {
	/// Creates a meta for `collection_name`. The singular name defaults to the
	/// collection name until [`with_name`](Self::with_name) is called.
	///
	/// # Errors
	///
	/// Returns [`ResourceError::EmptyCollectionName`] when the collection name
	/// is empty or whitespace only.
	pub fn new(collection_name: impl Into<String>) -> Result<Self> {
		let collection_name = collection_name.into();
		if collection_name.trim().is_empty() {
			return Err(ResourceError::EmptyCollectionName);
		}

		Ok(Self {
			name: collection_name.clone(),
			collection_name,
			href: None,
		})
	}

	/// Sets the singular name. An empty name keeps the collection name.
	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		let name = name.into();
		if !name.is_empty() {
			self.name = name;
		}
		self
	}

	/// Sets the href pattern.
	///
	/// # Errors
	///
	/// Returns [`ResourceError::MalformedHref`] when the pattern does not parse.
	pub fn with_href(mut self, href: &str) -> Result<Self> {
		self.href = Some(parse_configured(href)?);
		Ok(self)
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn collection_name(&self) -> &str {
		&self.collection_name
	}

	pub fn href(&self) -> Option<&HrefPattern> {
		self.href.as_ref()
	}
}

impl AsRef<ResourceMeta> for ResourceMeta {
	fn as_ref(&self) -> &ResourceMeta {
		self
	}
}

/// A primary collection to serialize.
///
/// # Examples
///
/// ```
/// use linkdoc_resource::{Attributes, Entity, Identifier, LinkTemplate, Resource};
///
/// struct Post {
///     id: i64,
/// }
///
/// impl Entity for Post {
///     fn id(&self) -> Option<Identifier> {
///         Some(self.id.into())
///     }
///
///     fn attributes(&self) -> Attributes {
///         Attributes::new()
///     }
/// }
///
/// let posts = Resource::builder("posts")
///     .name("post")
///     .href("/posts/{posts.id}")
///     .entities([Post { id: 1 }, Post { id: 2 }])
///     .template(LinkTemplate::new("posts.comments", "/posts/{posts.id}/comments").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(posts.collection_name(), "posts");
/// assert_eq!(posts.entities().len(), 2);
/// assert_eq!(posts.templates().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Resource<E> {
	meta: ResourceMeta,
	entities: Vec<E>,
	relations: Vec<Relation<E>>,
	templates: Vec<LinkTemplate>,
}

impl<E> Resource<E> {
	/// Starts building a resource for `collection_name`.
	pub fn builder(collection_name: impl Into<String>) -> ResourceBuilder<E> {
		ResourceBuilder::new(collection_name)
	}

	pub fn meta(&self) -> &ResourceMeta {
		&self.meta
	}

	pub fn name(&self) -> &str {
		self.meta.name()
	}

	pub fn collection_name(&self) -> &str {
		self.meta.collection_name()
	}

	pub fn href(&self) -> Option<&HrefPattern> {
		self.meta.href()
	}

	/// Entities in declaration order.
	pub fn entities(&self) -> &[E] {
		&self.entities
	}

	/// Relations in declaration order.
	pub fn relations(&self) -> &[Relation<E>] {
		&self.relations
	}

	/// Link templates in declaration order.
	pub fn templates(&self) -> &[LinkTemplate] {
		&self.templates
	}
}

impl<E> AsRef<ResourceMeta> for Resource<E> {
	fn as_ref(&self) -> &ResourceMeta {
		&self.meta
	}
}

/// Builder yielding a validated, read-only [`Resource`].
pub struct ResourceBuilder<E> {
	collection_name: String,
	name: Option<String>,
	href: Option<String>,
	entities: Vec<E>,
	relations: Vec<Relation<E>>,
	templates: Vec<LinkTemplate>,
}

impl<E> ResourceBuilder<E> {
	pub fn new(collection_name: impl Into<String>) -> Self {
		Self {
			collection_name: collection_name.into(),
			name: None,
			href: None,
			entities: Vec::new(),
			relations: Vec::new(),
			templates: Vec::new(),
		}
	}

	/// Singular name, used as the links key of to-one relations targeting this resource.
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Href pattern for documents of this collection, e.g. `/posts/{posts.id}`.
	pub fn href(mut self, href: impl Into<String>) -> Self {
		self.href = Some(href.into());
		self
	}

	/// Appends one entity.
	pub fn entity(mut self, entity: E) -> Self {
		self.entities.push(entity);
		self
	}

	/// Appends entities in order.
	pub fn entities(self, entities: impl IntoIterator<Item = E>) -> Self {
		entities.into_iter().fold(self, Self::entity)
	}

	/// Appends one relation.
	pub fn relation(mut self, relation: Relation<E>) -> Self {
		self.relations.push(relation);
		self
	}

	/// Appends relations in order.
	pub fn relations(self, relations: impl IntoIterator<Item = Relation<E>>) -> Self {
		relations.into_iter().fold(self, Self::relation)
	}

	/// Appends one link template.
	pub fn template(mut self, template: LinkTemplate) -> Self {
		self.templates.push(template);
		self
	}

	/// Appends link templates in order.
	pub fn templates(self, templates: impl IntoIterator<Item = LinkTemplate>) -> Self {
		templates.into_iter().fold(self, Self::template)
	}

	/// Validates the configuration and yields the resource.
	///
	/// # Errors
	///
	/// - [`ResourceError::EmptyCollectionName`] for a blank collection name
	/// - [`ResourceError::ReservedCollectionName`] for `links` or `linked`
	/// - [`ResourceError::MalformedHref`] when the href pattern does not parse
	/// - [`ResourceError::MissingIdentifier`] when an entity has no identifier
	/// - [`ResourceError::DuplicateEntity`] when two entities share an identifier
	pub fn build(self) -> Result<Resource<E>>
	where
		E: Entity,
	{
		let mut meta = ResourceMeta::new(self.collection_name)?;
		if RESERVED_COLLECTION_NAMES.contains(&meta.collection_name()) {
			return Err(ResourceError::ReservedCollectionName {
				name: meta.collection_name().to_string(),
			});
		}
		if let Some(name) = self.name {
			meta = meta.with_name(name);
		}
		if let Some(href) = self.href {
			meta = meta.with_href(&href)?;
		}

		let mut seen = HashSet::with_capacity(self.entities.len());
		for entity in &self.entities {
			let id = entity
				.id()
				.ok_or_else(|| ResourceError::MissingIdentifier {
					collection: meta.collection_name().to_string(),
				})?
				.to_string();
			if !seen.insert(id.clone()) {
				return Err(ResourceError::DuplicateEntity {
					collection: meta.collection_name().to_string(),
					id,
				});
			}
		}

		Ok(Resource {
			meta,
			entities: self.entities,
			relations: self.relations,
			templates: self.templates,
		})
	}
}
