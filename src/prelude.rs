//! Everything needed to build and encode collections.

pub use crate::collection::{Collection, CollectionBuilder};
pub use crate::core::{Item, ModelError, Result, Symlink};
pub use crate::json::CodecConfig;
