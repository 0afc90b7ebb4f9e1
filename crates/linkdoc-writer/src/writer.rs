//! Document assembly
//!
//! [`Writer::write`] turns a [`Resource`] into a [`Document`] in three passes
//! over the resource: link templates, primary documents with their relationship
//! links, then the linked side-table. Every call builds its own working state,
//! so a writer and the resources it renders can be shared between threads.

use indexmap::IndexMap;
use linkdoc_resource::{BindContext, BindValue, Entity, Relation, RelationKind, Resource};

use crate::config::{LinkForm, WriterConfig};
use crate::document::{
	Document, LinkObject, LinkValue, Linkage, LinkedTable, ResourceDocument, TemplateLink,
};
use crate::error::{Result, WriterError};

const ID_KEY: &str = "id";
const HREF_KEY: &str = "href";
const LINKS_KEY: &str = "links";

/// Renders resources into documents.
///
/// # Examples
///
/// ```
/// use linkdoc_resource::{Attributes, Entity, Identifier, Resource};
/// use linkdoc_writer::{Writer, WriterConfig};
/// use serde_json::json;
///
/// struct Post {
///     id: i64,
///     content: String,
/// }
///
/// impl Entity for Post {
///     fn id(&self) -> Option<Identifier> {
///         Some(self.id.into())
///     }
///
///     fn attributes(&self) -> Attributes {
///         let mut attributes = Attributes::new();
///         attributes.insert("content".to_string(), json!(self.content));
///         attributes
///     }
/// }
///
/// let posts = Resource::builder("posts")
///     .href("/posts/{posts.id}")
///     .entity(Post { id: 1, content: "x".to_string() })
///     .build()
///     .unwrap();
///
/// let document = Writer::new(WriterConfig::default()).write(&posts).unwrap();
///
/// assert_eq!(
///     document.to_value().unwrap(),
///     json!({"posts": [{"id": "1", "content": "x", "href": "/posts/1"}]})
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Writer {
	config: WriterConfig,
}

impl Writer {
	pub fn new(config: WriterConfig) -> Self {
		Self { config }
	}

	pub fn config(&self) -> &WriterConfig {
		&self.config
	}

	/// Assembles the document for `resource`.
	///
	/// # Errors
	///
	/// - [`WriterError::MissingIdentifier`] when a primary entity has no identifier
	/// - [`WriterError::MissingRelatedIdentifier`] when an accessor yields an
	///   entity without an identifier
	/// - [`WriterError::RelationArity`] when a to-one accessor yields several
	///   entities and `strict_relation_arity` is set
	pub fn write<E: Entity>(&self, resource: &Resource<E>) -> Result<Document> {
		tracing::debug!(
			collection = %resource.collection_name(),
			entities = resource.entities().len(),
			relations = resource.relations().len(),
			templates = resource.templates().len(),
			"Writing document"
		);

		if resource.entities().is_empty() {
			tracing::debug!(
				collection = %resource.collection_name(),
				"No primary entities, document is empty"
			);
			return Ok(Document::empty(resource.collection_name()));
		}

		let assembly = Assembly {
			config: &self.config,
			resource,
		};

		let links = if self.config.attach_templates {
			assembly.render_templates()
		} else {
			IndexMap::new()
		};

		let primary = assembly.render_primary()?;

		let linked = if self.config.attach_linked {
			assembly.render_linked()?
		} else {
			LinkedTable::default()
		};

		tracing::debug!(
			collection = %resource.collection_name(),
			primary = primary.len(),
			linked = linked.len(),
			"Document written"
		);

		Ok(Document::new(
			resource.collection_name(),
			links,
			primary,
			linked.into_sections(),
		))
	}
}

/// Assembles the document for `resource` with `config`.
///
/// Shorthand for `Writer::new(config.clone()).write(resource)`.
pub fn write<E: Entity>(resource: &Resource<E>, config: &WriterConfig) -> Result<Document> {
	Writer::new(config.clone()).write(resource)
}

/// Working state of one `write` call.
struct Assembly<'r, E> {
	config: &'r WriterConfig,
	resource: &'r Resource<E>,
}

impl<E: Entity> Assembly<'_, E> {
	/// Link templates are rendered verbatim; they are not bound to any entity.
	fn render_templates(&self) -> IndexMap<String, TemplateLink> {
		let mut links = IndexMap::new();
		for template in self.resource.templates() {
			let href = template.href().as_str().to_string();
			let link = if self.config.template_links_as_object {
				TemplateLink::Object {
					href,
					media_type: template.media_type().map(str::to_string),
				}
			} else {
				TemplateLink::Href(href)
			};
			links.insert(template.key().to_string(), link);
		}
		links
	}

	fn render_primary(&self) -> Result<Vec<ResourceDocument>> {
		let with_links = self.config.attach_document_links && !self.resource.relations().is_empty();

		self.resource
			.entities()
			.iter()
			.map(|entity| -> Result<ResourceDocument> {
				let id = self.entity_id(entity)?;
				let href = self.primary_href(&id);
				let links = if with_links {
					Some(self.render_links(entity, &id)?)
				} else {
					None
				};
				Ok(render_document(
					self.resource.collection_name(),
					id,
					entity,
					href,
					links,
				))
			})
			.collect()
	}

	fn render_links(&self, entity: &E, entity_id: &str) -> Result<IndexMap<String, LinkValue>> {
		let mut links = IndexMap::new();
		for relation in self.resource.relations() {
			let ids: Vec<String> = self
				.resolve(relation, entity, entity_id)?
				.into_iter()
				.map(|(_, id)| id)
				.collect();
			let link = match relation.kind() {
				RelationKind::ToOne => self.render_to_one(relation, entity_id, ids),
				RelationKind::ToMany => self.render_to_many(relation, entity_id, ids),
			};
			links.insert(relation.key().to_string(), link);
		}
		Ok(links)
	}

	fn render_to_one(&self, relation: &Relation<E>, entity_id: &str, ids: Vec<String>) -> LinkValue {
		if ids.len() > 1 {
			tracing::warn!(
				collection = %self.resource.collection_name(),
				relation = %relation.key(),
				entity_id = %entity_id,
				found = ids.len(),
				"To-one relation yielded several entities, linking the first"
			);
		}

		let Some(first) = ids.first().cloned() else {
			return LinkValue::Null;
		};
		if self.config.link_form == LinkForm::Id {
			return LinkValue::Id(first);
		}

		// Only the id is narrowed to the first entity; the href binds all of them.
		let bound = if ids.len() > 1 {
			BindValue::Many(ids)
		} else {
			BindValue::One(first.clone())
		};
		LinkValue::Object(self.link_object(relation, entity_id, Linkage::One(first), bound))
	}

	fn render_to_many(&self, relation: &Relation<E>, entity_id: &str, ids: Vec<String>) -> LinkValue {
		match self.config.link_form {
			LinkForm::Id => LinkValue::Ids(ids),
			LinkForm::Object => {
				let bound = BindValue::Many(ids.clone());
				LinkValue::Object(self.link_object(relation, entity_id, Linkage::Many(ids), bound))
			}
			LinkForm::ObjectsArray => LinkValue::Objects(
				ids.into_iter()
					.map(|id| {
						let bound = BindValue::One(id.clone());
						self.link_object(relation, entity_id, Linkage::One(id), bound)
					})
					.collect(),
			),
		}
	}

	fn link_object(
		&self,
		relation: &Relation<E>,
		entity_id: &str,
		linkage: Linkage,
		bound: BindValue,
	) -> LinkObject {
		let binds = self.binds(entity_id).with(relation.collection_name(), bound);

		LinkObject {
			href: relation.href().map(|pattern| pattern.bind(&binds)),
			linkage,
			collection: relation.collection_name().to_string(),
		}
	}

	fn render_linked(&self) -> Result<LinkedTable> {
		let mut linked = LinkedTable::default();

		for entity in self.resource.entities() {
			let entity_id = self.entity_id(entity)?;
			for relation in self.resource.relations() {
				let collection_name = relation.collection_name();
				for (related, related_id) in self.resolve(relation, entity, &entity_id)? {
					if linked.contains(collection_name, &related_id) {
						tracing::trace!(
							collection = %collection_name,
							id = %related_id,
							"Linked document already rendered, skipping"
						);
						continue;
					}

					let href = if self.config.attach_document_href {
						let binds = self
							.binds(&entity_id)
							.with(collection_name, related_id.as_str());
						relation.href().map(|pattern| pattern.bind(&binds))
					} else {
						None
					};
					let document =
						render_document(collection_name, related_id, related, href, None);
					linked.insert(collection_name, document);
				}
			}
		}

		Ok(linked)
	}

	/// Related entities of `entity` through `relation`, paired with their ids.
	fn resolve<'e>(
		&self,
		relation: &Relation<E>,
		entity: &'e E,
		entity_id: &str,
	) -> Result<Vec<(&'e dyn Entity, String)>> {
		let related = relation.resolve(entity).into_vec();

		if relation.is_to_one() && related.len() > 1 && self.config.strict_relation_arity {
			return Err(WriterError::RelationArity {
				relation: relation.key().to_string(),
				entity_id: entity_id.to_string(),
				found: related.len(),
			});
		}

		related
			.into_iter()
			.map(|related| -> Result<(&'e dyn Entity, String)> {
				let id = related
					.id()
					.ok_or_else(|| WriterError::MissingRelatedIdentifier {
						collection: relation.collection_name().to_string(),
						relation: relation.key().to_string(),
					})?;
				Ok((related, id.to_string()))
			})
			.collect()
	}

	fn entity_id(&self, entity: &E) -> Result<String> {
		entity
			.id()
			.map(|id| id.to_string())
			.ok_or_else(|| WriterError::MissingIdentifier {
				collection: self.resource.collection_name().to_string(),
			})
	}

	fn primary_href(&self, entity_id: &str) -> Option<String> {
		if !self.config.attach_document_href {
			return None;
		}
		self.resource
			.href()
			.map(|pattern| pattern.bind(&self.binds(entity_id)))
	}

	fn binds(&self, entity_id: &str) -> BindContext {
		BindContext::new().with(self.resource.collection_name(), entity_id)
	}
}

/// Builds a document from `entity`, dropping attributes that would shadow a
/// field the writer sets.
fn render_document(
	collection_name: &str,
	id: String,
	entity: &dyn Entity,
	href: Option<String>,
	links: Option<IndexMap<String, LinkValue>>,
) -> ResourceDocument {
	let mut attributes = entity.attributes();
	attributes.retain(|key, _| {
		let reserved = key == ID_KEY
			|| (key == HREF_KEY && href.is_some())
			|| (key == LINKS_KEY && links.is_some());
		if reserved {
			tracing::debug!(
				collection = %collection_name,
				id = %id,
				attribute = %key,
				"Dropping attribute shadowing a reserved field"
			);
		}
		!reserved
	});

	ResourceDocument {
		id,
		attributes,
		href,
		links,
	}
}
