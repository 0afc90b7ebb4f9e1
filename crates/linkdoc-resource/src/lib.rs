//! # linkdoc-resource
//!
//! Descriptors consumed by the linkdoc writer.
//!
//! - [`Entity`]: the capability a domain object implements to be rendered
//! - [`Resource`]: a primary collection with its entities, relations and link templates
//! - [`Relation`]: a to-one or to-many reference to another collection, with its accessor
//! - [`LinkTemplate`]: a named href rendered in the document's top-level `links`
//! - [`HrefPattern`]: a URL pattern with `{collection.id}` placeholders
//!
//! Descriptors are validated when they are built. Once built they are
//! read-only and may be shared between threads and reused across writes.

pub mod entity;
pub mod error;
pub mod href;
pub mod relation;
pub mod resource;
pub mod template;

pub use entity::{Attributes, Entity, Identifier, Related, to_attributes};
pub use error::{HrefError, ResourceError, Result};
pub use href::{BindContext, BindValue, HrefPattern};
pub use relation::{Accessor, Relation, RelationKind};
pub use resource::{RESERVED_COLLECTION_NAMES, Resource, ResourceBuilder, ResourceMeta};
pub use template::LinkTemplate;
