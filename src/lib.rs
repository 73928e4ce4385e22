// ============================================================================
// Resource Collection Library
// ============================================================================

//! Paginated collection value object for structured JSON response payloads.
//!
//! A [`Collection`] holds an ordered list of [`Item`]s (nested resources,
//! [`Symlink`] references or scalars) plus caching and pagination metadata.
//! Optional metadata stays out of the serialized payload until it is set.
//!
//! ```
//! use resource_collection::{Collection, Symlink};
//!
//! # fn main() -> resource_collection::Result<()> {
//! let page = Collection::builder()
//!     .id("/users")
//!     .item(Symlink::new("/users/123"))
//!     .item(Symlink::new("/users/789"))
//!     .total(500)
//!     .limit(10)
//!     .build()?;
//!
//! let json = page.to_json()?;
//! assert!(json.starts_with(r#"{"$type":"collection","$id":"/users""#));
//! # Ok(())
//! # }
//! ```

pub mod collection;
pub mod core;
pub mod json;
pub mod prelude;

// Re-export main types for convenience
pub use crate::collection::{COLLECTION_KIND, Collection, CollectionBuilder, MAX_ITEMS};
pub use crate::core::{Item, ModelError, Result, Symlink};
pub use crate::json::CodecConfig;
