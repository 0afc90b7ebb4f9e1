//! Typed output of the writer
//!
//! A [`Document`] serializes to
//!
//! ```text
//! {
//!   "links":  { "<template key>": "<href>" | {"href": .., "type": ..} },
//!   "<collection>": [ {"id": .., ..attributes, "href": .., "links": {..}} ],
//!   "linked": { "<collection>": [ {"id": .., ..attributes, "href": ..} ] }
//! }
//! ```
//!
//! `links` and `linked` are omitted when empty. A document without primary
//! documents serializes to `{}`.

use indexmap::IndexMap;
use linkdoc_resource::Attributes;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// Top-level key of rendered link templates.
pub const LINKS_KEY: &str = "links";

/// Top-level key of the linked side-table.
pub const LINKED_KEY: &str = "linked";

/// An assembled document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
	collection_name: String,
	links: IndexMap<String, TemplateLink>,
	primary: Vec<ResourceDocument>,
	linked: IndexMap<String, Vec<ResourceDocument>>,
}

impl Document {
	pub(crate) fn new(
		collection_name: impl Into<String>,
		links: IndexMap<String, TemplateLink>,
		primary: Vec<ResourceDocument>,
		linked: IndexMap<String, Vec<ResourceDocument>>,
	) -> Self {
		if primary.is_empty() {
			return Self::empty(collection_name);
		}

		Self {
			collection_name: collection_name.into(),
			links,
			primary,
			linked,
		}
	}

	/// A document with nothing to report.
	pub fn empty(collection_name: impl Into<String>) -> Self {
		Self {
			collection_name: collection_name.into(),
			links: IndexMap::new(),
			primary: Vec::new(),
			linked: IndexMap::new(),
		}
	}

	/// Whether the document has no primary documents, and therefore serializes to `{}`.
	pub fn is_empty(&self) -> bool {
		self.primary.is_empty()
	}

	/// Key of the primary section.
	pub fn collection_name(&self) -> &str {
		&self.collection_name
	}

	/// Rendered link templates by key.
	pub fn links(&self) -> &IndexMap<String, TemplateLink> {
		&self.links
	}

	/// Primary documents in entity declaration order.
	pub fn primary(&self) -> &[ResourceDocument] {
		&self.primary
	}

	/// Linked documents by collection, each in first-reference order.
	pub fn linked(&self) -> &IndexMap<String, Vec<ResourceDocument>> {
		&self.linked
	}

	/// Linked documents of one collection.
	pub fn linked_collection(&self, collection_name: &str) -> Option<&[ResourceDocument]> {
		self.linked.get(collection_name).map(Vec::as_slice)
	}

	pub fn to_value(&self) -> serde_json::Result<Value> {
		serde_json::to_value(self)
	}

	pub fn to_json_string(&self) -> serde_json::Result<String> {
		serde_json::to_string(self)
	}
}

impl Serialize for Document {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		if self.primary.is_empty() {
			return serializer.serialize_map(Some(0))?.end();
		}

		let len = 1 + usize::from(!self.links.is_empty()) + usize::from(!self.linked.is_empty());
		let mut map = serializer.serialize_map(Some(len))?;
		if !self.links.is_empty() {
			map.serialize_entry(LINKS_KEY, &self.links)?;
		}
		map.serialize_entry(&self.collection_name, &self.primary)?;
		if !self.linked.is_empty() {
			map.serialize_entry(LINKED_KEY, &self.linked)?;
		}
		map.end()
	}
}

/// A rendered primary or linked document.
///
/// Attributes are flattened next to `id`, `href` and `links`. The writer never
/// lets an attribute shadow one of those keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceDocument {
	pub id: String,
	#[serde(flatten)]
	pub attributes: Attributes,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub href: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub links: Option<IndexMap<String, LinkValue>>,
}

/// A rendered relationship link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LinkValue {
	/// A to-one relation without a related entity.
	Null,
	Id(String),
	Ids(Vec<String>),
	Object(LinkObject),
	Objects(Vec<LinkObject>),
}

/// `{"id" | "ids": .., "href": .., "type": ..}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkObject {
	#[serde(flatten)]
	pub linkage: Linkage,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub href: Option<String>,
	/// Target collection name.
	#[serde(rename = "type")]
	pub collection: String,
}

/// Identifier(s) carried by a [`LinkObject`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Linkage {
	#[serde(rename = "id")]
	One(String),
	#[serde(rename = "ids")]
	Many(Vec<String>),
}

/// A rendered link template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TemplateLink {
	Href(String),
	Object {
		href: String,
		#[serde(rename = "type")]
		media_type: Option<String>,
	},
}

/// Linked documents keyed by collection, then by id.
///
/// The first document inserted for an id is kept.
#[derive(Debug, Default)]
pub(crate) struct LinkedTable {
	collections: IndexMap<String, IndexMap<String, ResourceDocument>>,
}

impl LinkedTable {
	pub(crate) fn contains(&self, collection_name: &str, id: &str) -> bool {
		self.collections
			.get(collection_name)
			.is_some_and(|documents| documents.contains_key(id))
	}

	/// Inserts `document` unless its id is already present. Returns whether it was inserted.
	pub(crate) fn insert(&mut self, collection_name: &str, document: ResourceDocument) -> bool {
		let documents = self
			.collections
			.entry(collection_name.to_string())
			.or_default();
		if documents.contains_key(&document.id) {
			return false;
		}
		documents.insert(document.id.clone(), document);
		true
	}

	pub(crate) fn len(&self) -> usize {
		self.collections.values().map(IndexMap::len).sum()
	}

	/// Flattens into per-collection arrays in insertion order, skipping empty collections.
	pub(crate) fn into_sections(self) -> IndexMap<String, Vec<ResourceDocument>> {
		self.collections
			.into_iter()
			.filter(|(_, documents)| !documents.is_empty())
			.map(|(collection_name, documents)| (collection_name, documents.into_values().collect()))
			.collect()
	}
}
