//! Error types for resource descriptor construction.

use thiserror::Error;

/// Syntax errors found while parsing an href pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HrefError {
	/// A `{` was opened but never closed.
	#[error("unterminated placeholder starting at byte {position}")]
	Unterminated { position: usize },

	/// A `}` appeared without a matching `{`.
	#[error("unexpected '}}' at byte {position}")]
	UnexpectedClose { position: usize },

	/// Placeholder names may only contain ASCII alphanumerics, `.`, `-` and `_`.
	#[error("invalid placeholder name '{name}'")]
	InvalidPlaceholder { name: String },
}

/// Errors that can occur while building resource descriptors.
///
/// These are configuration and data errors. They are raised when a
/// descriptor is built, never halfway through rendering a document.
#[derive(Debug, Error)]
pub enum ResourceError {
	/// The collection name is empty or whitespace only.
	#[error("collection name must not be empty")]
	EmptyCollectionName,

	/// The collection name collides with a top-level document section.
	#[error("collection name '{name}' is reserved")]
	ReservedCollectionName { name: String },

	/// A link template was declared with an empty key.
	#[error("link template key must not be empty")]
	EmptyTemplateKey,

	/// An href pattern could not be parsed.
	#[error("malformed href pattern '{pattern}': {reason}")]
	MalformedHref { pattern: String, reason: HrefError },

	/// An entity handed to a resource has no identifier.
	#[error("entity in collection '{collection}' has no identifier")]
	MissingIdentifier { collection: String },

	/// The same entity id appears twice in a resource's entity list.
	#[error("duplicate entity '{collection}#{id}'")]
	DuplicateEntity { collection: String, id: String },

	/// A dynamic value cannot be used as an identifier.
	#[error("value {value} cannot be used as an identifier")]
	InvalidIdentifier { value: String },

	/// Attributes must serialize to a JSON object.
	#[error("attributes must serialize to an object, got {found}")]
	AttributesNotAnObject { found: &'static str },

	/// Attribute serialization failed.
	#[error("attribute serialization failed: {0}")]
	Serialization(#[from] serde_json::Error),
}

/// Result type for resource operations
pub type Result<T> = std::result::Result<T, ResourceError>;
