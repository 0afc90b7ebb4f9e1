//! Link templates rendered in a document's top-level `links` section

use crate::error::{ResourceError, Result};
use crate::href::{HrefPattern, parse_configured};

/// A named href pattern, rendered once per document and never bound to an entity.
///
/// # Examples
///
/// ```
/// use linkdoc_resource::LinkTemplate;
///
/// let template = LinkTemplate::new("posts.comments", "/posts/{posts.id}/comments").unwrap();
/// assert_eq!(template.key(), "posts.comments");
/// assert_eq!(template.href().as_str(), "/posts/{posts.id}/comments");
/// assert!(template.media_type().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTemplate {
	key: String,
	href: HrefPattern,
	media_type: Option<String>,
}

impl LinkTemplate {
	/// Creates a template without a media type.
	///
	/// # Errors
	///
	/// Returns [`ResourceError::EmptyTemplateKey`] for an empty key and
	/// [`ResourceError::MalformedHref`] when `href` does not parse.
	pub fn new(key: impl Into<String>, href: &str) -> Result<Self> {
		let key = key.into();
		if key.is_empty() {
			return Err(ResourceError::EmptyTemplateKey);
		}
		let href = parse_configured(href)?;

		Ok(Self {
			key,
			href,
			media_type: None,
		})
	}

	/// Creates a template carrying a media type.
	pub fn typed(key: impl Into<String>, href: &str, media_type: impl Into<String>) -> Result<Self> {
		let mut template = Self::new(key, href)?;
		template.media_type = Some(media_type.into());
		Ok(template)
	}

	pub fn key(&self) -> &str {
		&self.key
	}

	pub fn href(&self) -> &HrefPattern {
		&self.href
	}

	pub fn media_type(&self) -> Option<&str> {
		self.media_type.as_deref()
	}
}
