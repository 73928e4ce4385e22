use serde::Serialize;
use serde_json::{Map, Value as JsonValue};
use std::fmt;

use crate::collection::Collection;
use crate::core::Symlink;

/// A single entry of a [`Collection`].
///
/// Items serialize untagged: scalars as JSON scalars, nested values through
/// their own `Serialize` impl. `Empty` marks a slot created by growing the
/// sequence past its end and renders as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Item {
    Empty,
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    List(Vec<Item>),
    Symlink(Symlink),
    Collection(Box<Collection>),
    Object(Map<String, JsonValue>),
}

impl Item {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Integer(_) | Self::Float(_) => "number",
            Self::Text(_) => "string",
            Self::List(_) => "array",
            Self::Symlink(_) => "symlink",
            Self::Collection(_) => "collection",
            Self::Object(_) => "object",
        }
    }

    /// True for placeholder slots left behind by sparse growth.
    pub fn is_empty_slot(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_symlink(&self) -> Option<&Symlink> {
        match self {
            Self::Symlink(link) => Some(link),
            _ => None,
        }
    }

    pub fn as_collection(&self) -> Option<&Collection> {
        match self {
            Self::Collection(c) => Some(&**c),
            _ => None,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "<empty>"),
            Self::Null => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Float(fl) => write!(f, "{}", fl),
            Self::Text(s) => write!(f, "{}", s),
            Self::List(items) => write!(f, "[{} items]", items.len()),
            Self::Symlink(link) => write!(f, "{}", link),
            Self::Collection(c) => match c.id() {
                Some(id) => write!(f, "collection {}", id),
                None => write!(f, "collection"),
            },
            Self::Object(map) => write!(f, "{{{} fields}}", map.len()),
        }
    }
}

impl From<bool> for Item {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<i32> for Item {
    fn from(i: i32) -> Self {
        Self::Integer(i64::from(i))
    }
}

impl From<i64> for Item {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<u32> for Item {
    fn from(i: u32) -> Self {
        Self::Integer(i64::from(i))
    }
}

impl From<f64> for Item {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<String> for Item {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Item {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<Symlink> for Item {
    fn from(link: Symlink) -> Self {
        Self::Symlink(link)
    }
}

impl From<Collection> for Item {
    fn from(c: Collection) -> Self {
        Self::Collection(Box::new(c))
    }
}

impl From<Map<String, JsonValue>> for Item {
    fn from(map: Map<String, JsonValue>) -> Self {
        Self::Object(map)
    }
}

impl<T: Into<Item>> From<Option<T>> for Item {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Item>> From<Vec<T>> for Item {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}
