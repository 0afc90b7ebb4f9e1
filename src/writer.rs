//! Document writer module.
//!
//! Assembles resources into documents.
//!
//! # Examples
//!
//! ```rust
//! use linkdoc::writer::{LinkForm, WriterConfig};
//!
//! let config = WriterConfig::from_toml_str("link_form = \"id\"").unwrap();
//! assert_eq!(config.link_form, LinkForm::Id);
//! ```

#[cfg(feature = "writer")]
pub use linkdoc_writer::*;
