//! Loosely typed setters
//!
//! Entry points for callers holding untyped `serde_json::Value`s, such as a
//! decoded request body. They keep the distinction between a value of the
//! wrong type and a value out of range, and treat JSON `null` as "unset".

use serde_json::{Number, Value as JsonValue};

use super::Collection;
use crate::core::{ModelError, Result};
use crate::json::{CodecConfig, decode_item, json_type_name};

impl Collection {
    pub fn set_id_value(&mut self, id: &JsonValue) -> Result<&mut Self> {
        match id {
            JsonValue::String(s) => Ok(self.set_id(s.as_str())),
            JsonValue::Null => Ok(self.unset_id()),
            other => Err(ModelError::invalid(
                "id",
                format!(
                    "Expecting id to be a string or undefined, but got {}",
                    json_type_name(other)
                ),
            )),
        }
    }

    pub fn set_items_value(&mut self, items: &JsonValue) -> Result<&mut Self> {
        self.apply_items_value(items, &CodecConfig::default())
    }

    pub(crate) fn apply_items_value(
        &mut self,
        items: &JsonValue,
        config: &CodecConfig,
    ) -> Result<&mut Self> {
        let JsonValue::Array(values) = items else {
            return Err(ModelError::invalid(
                "items",
                format!(
                    "Expecting items to be an array, got {}",
                    json_type_name(items)
                ),
            ));
        };

        // Convert everything first so a bad nested item leaves state untouched.
        let converted = values
            .iter()
            .cloned()
            .map(|value| decode_item(value, config))
            .collect::<Result<Vec<_>>>()?;
        self.items = converted;
        Ok(self)
    }

    pub fn set_expires_value(&mut self, expires: &JsonValue) -> Result<&mut Self> {
        self.expires = metadata_from_value("expires", expires)?;
        Ok(self)
    }

    pub fn set_total_value(&mut self, total: &JsonValue) -> Result<&mut Self> {
        self.total = metadata_from_value("total", total)?;
        Ok(self)
    }

    pub fn set_limit_value(&mut self, limit: &JsonValue) -> Result<&mut Self> {
        self.limit = metadata_from_value("limit", limit)?;
        Ok(self)
    }

    pub fn set_item_value(&mut self, position: &JsonValue, item: JsonValue) -> Result<&mut Self> {
        let JsonValue::Number(n) = position else {
            return Err(ModelError::invalid(
                "position",
                format!(
                    "Expecting position to be a number, got {}",
                    json_type_name(position)
                ),
            ));
        };

        let index = non_negative_integer("position", n)?;
        let index = usize::try_from(index).map_err(|_| {
            ModelError::invalid(
                "position",
                format!("Expecting position to be addressable, got {}", n),
            )
        })?;
        let item = decode_item(item, &CodecConfig::default())?;
        self.place_item(index, item)?;
        Ok(self)
    }
}

/// `null` means unset and skips the range check entirely.
fn metadata_from_value(field: &'static str, value: &JsonValue) -> Result<Option<u64>> {
    match value {
        JsonValue::Null => Ok(None),
        JsonValue::Number(n) => non_negative_integer(field, n).map(Some),
        other => Err(ModelError::invalid(
            field,
            format!(
                "Expecting {} to be a number or undefined, got {}",
                field,
                json_type_name(other)
            ),
        )),
    }
}

// Range is checked before integrality: -1.5 reports "0 or greater".
fn non_negative_integer(field: &'static str, n: &Number) -> Result<u64> {
    if let Some(u) = n.as_u64() {
        return Ok(u);
    }

    let negative = n.as_i64().is_some_and(|i| i < 0) || n.as_f64().is_some_and(|f| f < 0.0);
    if negative {
        return Err(ModelError::invalid(
            field,
            format!("Expecting {} to be 0 or greater", field),
        ));
    }

    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f < u64::MAX as f64 => Ok(f as u64),
        _ => Err(ModelError::invalid(
            field,
            format!("Expecting {} to be an integer, got {}", field, n),
        )),
    }
}
