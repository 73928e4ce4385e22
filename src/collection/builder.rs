use super::Collection;
use crate::core::{Item, Result};

/// By-value builder producing a validated [`Collection`].
///
/// Values are only checked in [`build`](Self::build), which applies them
/// through the regular setters in constructor order (id, items, expires,
/// total, limit). The first failure is returned.
#[derive(Debug, Clone, Default)]
pub struct CollectionBuilder {
    id: Option<String>,
    items: Vec<Item>,
    expires: Option<i64>,
    total: Option<i64>,
    limit: Option<i64>,
}

impl CollectionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn items<I, T>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Item>,
    {
        self.items = items.into_iter().map(Into::into).collect();
        self
    }

    /// Append a single item
    pub fn item(mut self, item: impl Into<Item>) -> Self {
        self.items.push(item.into());
        self
    }

    pub fn expires(mut self, expires: i64) -> Self {
        self.expires = Some(expires);
        self
    }

    pub fn total(mut self, total: i64) -> Self {
        self.total = Some(total);
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn build(self) -> Result<Collection> {
        let mut collection = Collection::from_parts(self.id, Some(self.items), self.expires)?;
        if let Some(total) = self.total {
            collection.set_total(total)?;
        }
        if let Some(limit) = self.limit {
            collection.set_limit(limit)?;
        }
        Ok(collection)
    }
}
