//! Href patterns and identifier binding
//!
//! An href pattern is a URL with zero or more `{collection.id}` placeholders,
//! for example `/posts/{posts.id}/comments/{comments.id}`. Patterns are parsed
//! once, when a descriptor is configured, and bound many times while documents
//! are rendered.
//!
//! Binding is lenient: placeholders whose collection is not bound are kept
//! verbatim, so `/posts/{posts.id}` bound with nothing stays
//! `/posts/{posts.id}`.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::error::{HrefError, ResourceError};

/// Suffix a placeholder must carry to be bindable.
const ID_SUFFIX: &str = ".id";

/// Separator used when several identifiers are bound to one placeholder.
const MULTI_ID_SEPARATOR: &str = ",";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
	Literal(String),
	Placeholder(String),
}

/// A parsed href pattern.
///
/// # Examples
///
/// ```
/// use linkdoc_resource::{BindContext, HrefPattern};
///
/// let pattern = HrefPattern::parse("/posts/{posts.id}/comments/{comments.id}").unwrap();
/// let binds = BindContext::new()
///     .with("posts", "1")
///     .with("comments", vec!["11".to_string(), "12".to_string()]);
///
/// assert_eq!(pattern.bind(&binds), "/posts/1/comments/11,12");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HrefPattern {
	raw: String,
	segments: Vec<Segment>,
}

impl HrefPattern {
	/// Parses a pattern, validating its placeholders.
	///
	/// # Errors
	///
	/// - [`HrefError::Unterminated`] when a `{` is never closed
	/// - [`HrefError::UnexpectedClose`] for a `}` without an opening `{`
	/// - [`HrefError::InvalidPlaceholder`] when a placeholder name contains
	///   anything other than ASCII alphanumerics, `.`, `-` or `_`
	pub fn parse(pattern: &str) -> Result<Self, HrefError> {
		let mut segments = Vec::new();
		let mut literal = String::new();
		let mut chars = pattern.char_indices();

		while let Some((position, ch)) = chars.next() {
			match ch {
				'{' => {
					let mut name = String::new();
					let mut closed = false;
					for (_, next) in chars.by_ref() {
						if next == '}' {
							closed = true;
							break;
						}
						name.push(next);
					}
					if !closed {
						return Err(HrefError::Unterminated { position });
					}
					if !name.chars().all(is_placeholder_char) {
						return Err(HrefError::InvalidPlaceholder { name });
					}
					if !literal.is_empty() {
						segments.push(Segment::Literal(std::mem::take(&mut literal)));
					}
					segments.push(Segment::Placeholder(name));
				}
				'}' => return Err(HrefError::UnexpectedClose { position }),
				other => literal.push(other),
			}
		}

		if !literal.is_empty() {
			segments.push(Segment::Literal(literal));
		}

		Ok(Self {
			raw: pattern.to_string(),
			segments,
		})
	}

	/// The pattern as written.
	pub fn as_str(&self) -> &str {
		&self.raw
	}

	/// Placeholder names in order of appearance, without braces.
	pub fn placeholders(&self) -> impl Iterator<Item = &str> {
		self.segments.iter().filter_map(|segment| match segment {
			Segment::Placeholder(name) => Some(name.as_str()),
			Segment::Literal(_) => None,
		})
	}

	/// Substitutes every `{collection.id}` placeholder bound in `binds`.
	///
	/// Several identifiers bound to one collection are joined with commas.
	/// Anything unbound is left in place.
	pub fn bind(&self, binds: &BindContext) -> String {
		let mut result = String::with_capacity(self.raw.len());

		for segment in &self.segments {
			match segment {
				Segment::Literal(text) => result.push_str(text),
				Segment::Placeholder(name) => {
					let bound = name
						.strip_suffix(ID_SUFFIX)
						.and_then(|collection| binds.get(collection));
					match bound {
						Some(value) => value.write_to(&mut result),
						None => {
							result.push('{');
							result.push_str(name);
							result.push('}');
						}
					}
				}
			}
		}

		result
	}
}

/// Parses a pattern supplied as descriptor configuration.
pub(crate) fn parse_configured(pattern: &str) -> crate::error::Result<HrefPattern> {
	HrefPattern::parse(pattern).map_err(|reason| ResourceError::MalformedHref {
		pattern: pattern.to_string(),
		reason,
	})
}

fn is_placeholder_char(ch: char) -> bool {
	ch.is_ascii_alphanumeric() || matches!(ch, '.' | '-' | '_')
}

impl FromStr for HrefPattern {
	type Err = HrefError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl fmt::Display for HrefPattern {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.raw)
	}
}

impl Serialize for HrefPattern {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.raw)
	}
}

/// Identifier(s) bound to one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindValue {
	One(String),
	Many(Vec<String>),
}

impl BindValue {
	fn write_to(&self, out: &mut String) {
		match self {
			BindValue::One(id) => out.push_str(id),
			BindValue::Many(ids) => out.push_str(&ids.join(MULTI_ID_SEPARATOR)),
		}
	}
}

impl From<String> for BindValue {
	fn from(id: String) -> Self {
		BindValue::One(id)
	}
}

impl From<&str> for BindValue {
	fn from(id: &str) -> Self {
		BindValue::One(id.to_string())
	}
}

impl From<Vec<String>> for BindValue {
	fn from(ids: Vec<String>) -> Self {
		BindValue::Many(ids)
	}
}

/// Collection name to identifier(s) map used when binding href patterns.
///
/// Binding the same collection twice keeps the latest value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindContext {
	binds: IndexMap<String, BindValue>,
}

impl BindContext {
	pub fn new() -> Self {
		Self::default()
	}

	/// Binds `collection`, returning the extended context.
	pub fn with(mut self, collection: impl Into<String>, value: impl Into<BindValue>) -> Self {
		self.insert(collection, value);
		self
	}

	pub fn insert(&mut self, collection: impl Into<String>, value: impl Into<BindValue>) {
		self.binds.insert(collection.into(), value.into());
	}

	pub fn get(&self, collection: &str) -> Option<&BindValue> {
		self.binds.get(collection)
	}

	pub fn is_empty(&self) -> bool {
		self.binds.is_empty()
	}
}
