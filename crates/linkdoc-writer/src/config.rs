//! Writer configuration
//!
//! [`WriterConfig`] can be built in code with its `with_*` setters or loaded
//! from a TOML or JSON settings document. Every key is optional; missing keys
//! take the defaults below.
//!
//! | key                        | default    |
//! |----------------------------|------------|
//! | `link_form`                | `"object"` |
//! | `template_links_as_object` | `false`    |
//! | `attach_document_href`     | `true`     |
//! | `attach_document_links`    | `true`     |
//! | `attach_templates`         | `true`     |
//! | `attach_linked`            | `true`     |
//! | `strict_relation_arity`    | `false`    |

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Shape of a rendered relationship link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkForm {
	/// Bare id, or array of ids for to-many relations.
	Id,
	/// One `{id|ids, href, type}` object per relation.
	#[default]
	Object,
	/// Like `Object`, but to-many relations render one object per related entity.
	#[serde(alias = "objectsArray")]
	ObjectsArray,
}

/// Options controlling what the writer attaches to a document.
///
/// # Examples
///
/// ```
/// use linkdoc_writer::{LinkForm, WriterConfig};
///
/// let config = WriterConfig::default()
///     .with_link_form(LinkForm::Id)
///     .with_attach_linked(false);
///
/// assert_eq!(config.link_form, LinkForm::Id);
/// assert!(!config.attach_linked);
/// assert!(config.attach_document_href);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WriterConfig {
	/// Shape of relationship links in primary documents.
	pub link_form: LinkForm,

	/// Render top-level link templates as `{href, type}` objects instead of bare hrefs.
	pub template_links_as_object: bool,

	/// Attach a computed `href` to primary and linked documents.
	pub attach_document_href: bool,

	/// Attach a `links` map to primary documents when the resource has relations.
	pub attach_document_links: bool,

	/// Populate the top-level `links` section from the resource's link templates.
	pub attach_templates: bool,

	/// Compute the `linked` side-table.
	pub attach_linked: bool,

	/// Fail when a to-one accessor yields more than one entity instead of
	/// keeping the first one.
	pub strict_relation_arity: bool,
}

impl Default for WriterConfig {
	fn default() -> Self {
		Self {
			link_form: LinkForm::default(),
			template_links_as_object: false,
			attach_document_href: true,
			attach_document_links: true,
			attach_templates: true,
			attach_linked: true,
			strict_relation_arity: false,
		}
	}
}

impl WriterConfig {
	/// Loads a configuration from TOML.
	///
	/// # Examples
	///
	/// ```
	/// use linkdoc_writer::{LinkForm, WriterConfig};
	///
	/// let config = WriterConfig::from_toml_str(r#"
	///     link_form = "objects_array"
	///     attach_templates = false
	/// "#).unwrap();
	///
	/// assert_eq!(config.link_form, LinkForm::ObjectsArray);
	/// assert!(!config.attach_templates);
	/// assert!(config.attach_linked);
	/// ```
	pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(source)?)
	}

	/// Loads a configuration from JSON.
	pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
		Ok(serde_json::from_str(source)?)
	}

	pub fn with_link_form(mut self, link_form: LinkForm) -> Self {
		self.link_form = link_form;
		self
	}

	pub fn with_template_links_as_object(mut self, as_object: bool) -> Self {
		self.template_links_as_object = as_object;
		self
	}

	pub fn with_attach_document_href(mut self, attach: bool) -> Self {
		self.attach_document_href = attach;
		self
	}

	pub fn with_attach_document_links(mut self, attach: bool) -> Self {
		self.attach_document_links = attach;
		self
	}

	pub fn with_attach_templates(mut self, attach: bool) -> Self {
		self.attach_templates = attach;
		self
	}

	pub fn with_attach_linked(mut self, attach: bool) -> Self {
		self.attach_linked = attach;
		self
	}

	pub fn with_strict_relation_arity(mut self, strict: bool) -> Self {
		self.strict_relation_arity = strict;
		self
	}
}
