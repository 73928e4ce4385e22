//! Collection value object
//!
//! A `Collection` is an ordered, paginated group of items together with the
//! caching and pagination metadata a client needs to page through it.
//! Setters are fluent and validate before touching state, so a rejected call
//! leaves the collection exactly as it was.
//!
//! ```
//! use resource_collection::{Collection, Symlink};
//!
//! # fn main() -> resource_collection::Result<()> {
//! let mut users = Collection::with_id("/users");
//! users
//!     .set_items([
//!         Symlink::new("/users/123"),
//!         Symlink::new("/users/789"),
//!         Symlink::new("/users/456"),
//!     ])
//!     .set_expires(60000)? // cacheable for 60 seconds
//!     .set_total(500)? // size of the whole collection
//!     .set_limit(10)?; // page size requested by the client
//! assert_eq!(users.len(), 3);
//! # Ok(())
//! # }
//! ```

mod builder;
mod dynamic;

#[cfg(test)]
mod proptest_collection;

pub use builder::CollectionBuilder;

use log::trace;
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::core::{Item, ModelError, Result};

pub const COLLECTION_KIND: &str = "collection";

/// Upper bound on the number of slots `set_item` may grow the items to.
pub const MAX_ITEMS: usize = 1 << 20;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    id: Option<String>,
    items: Vec<Item>,
    expires: Option<u64>,
    total: Option<u64>,
    limit: Option<u64>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Build a collection from its optional constructor arguments.
    ///
    /// Every provided argument goes through the matching setter, so
    /// construction validates exactly like later mutation does.
    pub fn from_parts(
        id: Option<String>,
        items: Option<Vec<Item>>,
        expires: Option<i64>,
    ) -> Result<Self> {
        let mut collection = Self::new();
        if let Some(id) = id {
            collection.set_id(id);
        }
        if let Some(items) = items {
            collection.set_items(items);
        }
        if let Some(expires) = expires {
            collection.set_expires(expires)?;
        }
        Ok(collection)
    }

    pub fn builder() -> CollectionBuilder {
        CollectionBuilder::new()
    }

    pub fn kind(&self) -> &'static str {
        COLLECTION_KIND
    }

    // ------------------------------------------------------------------
    // id
    // ------------------------------------------------------------------

    pub fn set_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.id = Some(id.into());
        self
    }

    pub fn unset_id(&mut self) -> &mut Self {
        self.id = None;
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    // ------------------------------------------------------------------
    // items
    // ------------------------------------------------------------------

    /// Replace every item in the collection.
    pub fn set_items<I, T>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Item>,
    {
        self.items = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Place `item` at `position`, growing the sequence with
    /// [`Item::Empty`] slots when `position` is past the end.
    pub fn set_item(&mut self, position: i64, item: impl Into<Item>) -> Result<&mut Self> {
        if position < 0 {
            return Err(ModelError::invalid(
                "position",
                "Expecting position to be 0 or greater",
            ));
        }
        let index = usize::try_from(position).map_err(|_| {
            ModelError::invalid(
                "position",
                format!("Expecting position to be addressable, got {}", position),
            )
        })?;

        self.place_item(index, item.into())?;
        Ok(self)
    }

    fn place_item(&mut self, index: usize, item: Item) -> Result<()> {
        if index >= self.items.len() {
            let len = index
                .checked_add(1)
                .filter(|len| *len <= MAX_ITEMS)
                .ok_or_else(|| {
                    ModelError::invalid(
                        "position",
                        format!(
                            "Expecting position to be less than {}, got {}",
                            MAX_ITEMS, index
                        ),
                    )
                })?;
            trace!(
                "growing collection items from {} to {} slots",
                self.items.len(),
                len
            );
            self.items.resize(len, Item::Empty);
        }
        self.items[index] = item;
        Ok(())
    }

    /// Item at `position`, or `None` when out of range or an empty slot.
    pub fn get_item(&self, position: usize) -> Option<&Item> {
        self.items
            .get(position)
            .filter(|item| !item.is_empty_slot())
    }

    // ------------------------------------------------------------------
    // pagination and caching metadata
    // ------------------------------------------------------------------

    /// Milliseconds this collection may be cached for.
    pub fn set_expires(&mut self, expires: i64) -> Result<&mut Self> {
        self.expires = Some(non_negative("expires", expires)?);
        Ok(self)
    }

    pub fn unset_expires(&mut self) -> &mut Self {
        self.expires = None;
        self
    }

    pub fn expires(&self) -> Option<u64> {
        self.expires
    }

    /// Total number of items in the logical collection. May be larger than
    /// the number of items carried by this page.
    pub fn set_total(&mut self, total: i64) -> Result<&mut Self> {
        self.total = Some(non_negative("total", total)?);
        Ok(self)
    }

    pub fn unset_total(&mut self) -> &mut Self {
        self.total = None;
        self
    }

    pub fn total(&self) -> Option<u64> {
        self.total
    }

    /// Page size requested by the client.
    pub fn set_limit(&mut self, limit: i64) -> Result<&mut Self> {
        self.limit = Some(non_negative("limit", limit)?);
        Ok(self)
    }

    pub fn unset_limit(&mut self) -> &mut Self {
        self.limit = None;
        self
    }

    pub fn limit(&self) -> Option<u64> {
        self.limit
    }

    // ------------------------------------------------------------------
    // list edges
    // ------------------------------------------------------------------

    /// Remove the last slot. An empty placeholder comes back as `None`.
    pub fn pop(&mut self) -> Option<Item> {
        self.items.pop().filter(|item| !item.is_empty_slot())
    }

    pub fn push(&mut self, item: impl Into<Item>) -> &mut Self {
        self.items.push(item.into());
        self
    }

    /// Remove the first slot. An empty placeholder comes back as `None`.
    pub fn shift(&mut self) -> Option<Item> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0)).filter(|item| !item.is_empty_slot())
        }
    }

    pub fn unshift(&mut self, item: impl Into<Item>) -> &mut Self {
        self.items.insert(0, item.into());
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }
}

fn non_negative(field: &'static str, value: i64) -> Result<u64> {
    u64::try_from(value).map_err(|_| {
        ModelError::invalid(field, format!("Expecting {} to be 0 or greater", field))
    })
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl Serialize for Collection {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let len = 2
            + usize::from(self.id.is_some())
            + usize::from(self.expires.is_some())
            + usize::from(self.total.is_some())
            + usize::from(self.limit.is_some());

        let mut state = serializer.serialize_struct("Collection", len)?;
        state.serialize_field("$type", COLLECTION_KIND)?;
        if let Some(id) = &self.id {
            state.serialize_field("$id", id)?;
        }
        if let Some(expires) = self.expires {
            state.serialize_field("$expires", &expires)?;
        }
        if let Some(total) = self.total {
            state.serialize_field("total", &total)?;
        }
        if let Some(limit) = self.limit {
            state.serialize_field("limit", &limit)?;
        }
        state.serialize_field("items", &self.items)?;
        state.end()
    }
}
