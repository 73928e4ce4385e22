use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;

pub const SYMLINK_KIND: &str = "symlink";

/// Reference-only pointer to another resource by its identifier.
///
/// Symlinks are never resolved here; they serialize as
/// `{"$type": "symlink", "$id": "<id>"}` so a client can follow them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symlink {
    id: String,
}

impl Symlink {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> &'static str {
        SYMLINK_KIND
    }
}

impl Serialize for Symlink {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Symlink", 2)?;
        state.serialize_field("$type", SYMLINK_KIND)?;
        state.serialize_field("$id", &self.id)?;
        state.end()
    }
}

impl fmt::Display for Symlink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-> {}", self.id)
    }
}

impl From<&str> for Symlink {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Symlink {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}
