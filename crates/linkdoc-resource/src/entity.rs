//! Entity capability - the contract domain objects satisfy to be rendered
//!
//! The writer never names concrete entity types. Everything it needs from a
//! domain object goes through [`Entity`]: a stable identifier and a flat map of
//! output attributes. Related entities are reached through accessors registered
//! on a [`Relation`](crate::Relation), and handed back as [`Related`] values.

use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::{ResourceError, Result};

/// Flat, ordered map of output attributes.
pub type Attributes = IndexMap<String, Value>;

/// Stable identifier of an entity.
///
/// Rendered documents always carry the string form produced by `Display`.
///
/// # Examples
///
/// ```
/// use linkdoc_resource::Identifier;
///
/// assert_eq!(Identifier::from(42).to_string(), "42");
/// assert_eq!(Identifier::from("a1b2").to_string(), "a1b2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
	Int(i64),
	UInt(u64),
	Str(String),
}

impl fmt::Display for Identifier {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Identifier::Int(id) => write!(f, "{}", id),
			Identifier::UInt(id) => write!(f, "{}", id),
			Identifier::Str(id) => f.write_str(id),
		}
	}
}

impl Serialize for Identifier {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

macro_rules! identifier_from_signed {
	($($ty:ty),*) => {
		$(impl From<$ty> for Identifier {
			fn from(id: $ty) -> Self {
				Identifier::Int(i64::from(id))
			}
		})*
	};
}

macro_rules! identifier_from_unsigned {
	($($ty:ty),*) => {
		$(impl From<$ty> for Identifier {
			fn from(id: $ty) -> Self {
				Identifier::UInt(u64::from(id))
			}
		})*
	};
}

identifier_from_signed!(i8, i16, i32, i64);
identifier_from_unsigned!(u8, u16, u32, u64);

impl From<String> for Identifier {
	fn from(id: String) -> Self {
		Identifier::Str(id)
	}
}

impl From<&str> for Identifier {
	fn from(id: &str) -> Self {
		Identifier::Str(id.to_string())
	}
}

impl TryFrom<&Value> for Identifier {
	type Error = ResourceError;

	/// Coerces a dynamic value into an identifier.
	///
	/// Integers and strings are accepted as-is, other numbers through their
	/// string form. Null, booleans, arrays and objects are rejected.
	fn try_from(value: &Value) -> Result<Self> {
		match value {
			Value::String(id) => Ok(Identifier::Str(id.clone())),
			Value::Number(number) => {
				if let Some(id) = number.as_i64() {
					Ok(Identifier::Int(id))
				} else if let Some(id) = number.as_u64() {
					Ok(Identifier::UInt(id))
				} else {
					Ok(Identifier::Str(number.to_string()))
				}
			}
			other => Err(ResourceError::InvalidIdentifier {
				value: other.to_string(),
			}),
		}
	}
}

impl TryFrom<Value> for Identifier {
	type Error = ResourceError;

	fn try_from(value: Value) -> Result<Self> {
		Identifier::try_from(&value)
	}
}

/// A domain object that can be rendered into a document.
///
/// # Examples
///
/// ```
/// use linkdoc_resource::{Attributes, Entity, Identifier};
/// use serde_json::json;
///
/// struct Author {
///     id: i64,
///     name: String,
/// }
///
/// impl Entity for Author {
///     fn id(&self) -> Option<Identifier> {
///         Some(self.id.into())
///     }
///
///     fn attributes(&self) -> Attributes {
///         let mut attributes = Attributes::new();
///         attributes.insert("name".to_string(), json!(self.name));
///         attributes
///     }
/// }
///
/// let author = Author { id: 100, name: "Ann".to_string() };
/// assert_eq!(author.id(), Some(Identifier::Int(100)));
/// ```
pub trait Entity {
	/// Identifier of this entity, `None` when it has not been assigned one.
	fn id(&self) -> Option<Identifier>;

	/// Attributes that become top-level fields of the rendered document.
	fn attributes(&self) -> Attributes;
}

impl<T: Entity + ?Sized> Entity for &T {
	fn id(&self) -> Option<Identifier> {
		(**self).id()
	}

	fn attributes(&self) -> Attributes {
		(**self).attributes()
	}
}

impl<T: Entity + ?Sized> Entity for Box<T> {
	fn id(&self) -> Option<Identifier> {
		(**self).id()
	}

	fn attributes(&self) -> Attributes {
		(**self).attributes()
	}
}

impl<T: Entity + ?Sized> Entity for Rc<T> {
	fn id(&self) -> Option<Identifier> {
		(**self).id()
	}

	fn attributes(&self) -> Attributes {
		(**self).attributes()
	}
}

impl<T: Entity + ?Sized> Entity for Arc<T> {
	fn id(&self) -> Option<Identifier> {
		(**self).id()
	}

	fn attributes(&self) -> Attributes {
		(**self).attributes()
	}
}

/// Builds an attribute map from any serde-serializable value.
///
/// The value must serialize to a JSON object.
///
/// # Examples
///
/// ```
/// use linkdoc_resource::to_attributes;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Comment {
///     content: String,
/// }
///
/// let attributes = to_attributes(&Comment { content: "hi".to_string() }).unwrap();
/// assert_eq!(attributes["content"], "hi");
/// ```
pub fn to_attributes<T: Serialize + ?Sized>(value: &T) -> Result<Attributes> {
	match serde_json::to_value(value)? {
		Value::Object(map) => Ok(map.into_iter().collect()),
		other => Err(ResourceError::AttributesNotAnObject {
			found: value_kind(&other),
		}),
	}
}

fn value_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}

/// What a relation accessor yields for one entity.
pub enum Related<'a> {
	/// No related entity.
	None,
	/// A single related entity.
	One(&'a dyn Entity),
	/// A sequence of related entities.
	Many(Vec<&'a dyn Entity>),
}

impl<'a> Related<'a> {
	/// A single related entity.
	pub fn one<T: Entity + 'a>(entity: &'a T) -> Self {
		Related::One(entity)
	}

	/// A related entity that may be absent.
	pub fn optional<T: Entity + 'a>(entity: Option<&'a T>) -> Self {
		match entity {
			Some(entity) => Related::One(entity),
			None => Related::None,
		}
	}

	/// A sequence of related entities, in order.
	pub fn many<T, I>(entities: I) -> Self
	where
		T: Entity + 'a,
		I: IntoIterator<Item = &'a T>,
	{
		Related::Many(
			entities
				.into_iter()
				.map(|entity| entity as &'a dyn Entity)
				.collect(),
		)
	}

	/// Number of related entities.
	pub fn len(&self) -> usize {
		match self {
			Related::None => 0,
			Related::One(_) => 1,
			Related::Many(entities) => entities.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Flattens into a sequence, a single entity becoming a sequence of one.
	pub fn into_vec(self) -> Vec<&'a dyn Entity> {
		match self {
			Related::None => Vec::new(),
			Related::One(entity) => vec![entity],
			Related::Many(entities) => entities,
		}
	}
}

impl fmt::Debug for Related<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Related::None => f.write_str("None"),
			Related::One(entity) => f.debug_tuple("One").field(&entity.id()).finish(),
			Related::Many(entities) => {
				let ids: Vec<Option<Identifier>> = entities.iter().map(|entity| entity.id()).collect();
				f.debug_tuple("Many").field(&ids).finish()
			}
		}
	}
}
