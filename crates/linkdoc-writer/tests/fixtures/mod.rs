//! Test fixtures for linkdoc-writer
//!
//! Provides a small blog model (posts, authors, comments) and the resources
//! describing it.

#![allow(dead_code)]

mod blog;

pub use blog::*;
