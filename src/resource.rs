//! Resource descriptors module.
//!
//! Entities, relations, link templates and the resources that group them.
//!
//! # Examples
//!
//! ```rust
//! use linkdoc::resource::{HrefPattern, LinkTemplate};
//!
//! let template = LinkTemplate::new("posts.comments", "/posts/{posts.id}/comments").unwrap();
//! assert_eq!(template.href(), &HrefPattern::parse("/posts/{posts.id}/comments").unwrap());
//! ```

pub use linkdoc_resource::*;
