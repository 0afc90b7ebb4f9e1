//! Error types for document assembly and writer configuration.

use thiserror::Error;

/// Contract violations found while assembling a document.
///
/// `write` stops at the first violation and returns no partial output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WriterError {
	/// A primary entity has no identifier.
	#[error("entity in collection '{collection}' has no identifier")]
	MissingIdentifier { collection: String },

	/// A relation accessor yielded an entity without an identifier.
	#[error("entity related through '{relation}' in collection '{collection}' has no identifier")]
	MissingRelatedIdentifier { collection: String, relation: String },

	/// A to-one accessor yielded more than one entity.
	#[error("to-one relation '{relation}' of entity '{entity_id}' yielded {found} entities")]
	RelationArity {
		relation: String,
		entity_id: String,
		found: usize,
	},
}

/// Errors raised while loading a [`WriterConfig`](crate::WriterConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("invalid TOML writer configuration: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("invalid JSON writer configuration: {0}")]
	Json(#[from] serde_json::Error),
}

/// Result type for writer operations
pub type Result<T> = std::result::Result<T, WriterError>;
