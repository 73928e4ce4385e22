use log::debug;
use serde::de::{self, Deserialize, Deserializer};
use serde_json::Value as JsonValue;

use super::CodecConfig;
use super::decode::{decode_collection, decode_item};
use crate::collection::Collection;
use crate::core::{Item, ModelError, Result};

impl Collection {
    pub fn to_value(&self) -> Result<JsonValue> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json(&self) -> Result<String> {
        self.to_json_with(&CodecConfig::default())
    }

    pub fn to_json_with(&self, config: &CodecConfig) -> Result<String> {
        debug!(
            "encoding collection {:?} with {} items",
            self.id(),
            self.len()
        );
        let text = if config.pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Self::from_json_with(text, &CodecConfig::default())
    }

    /// Parse and validate a collection. Every field goes through the
    /// loosely typed setters, so decoded input obeys the same checks.
    pub fn from_json_with(text: &str, config: &CodecConfig) -> Result<Self> {
        let value: JsonValue = serde_json::from_str(text)?;
        let collection = decode_collection(value, config)?;
        debug!(
            "decoded collection {:?} with {} items",
            collection.id(),
            collection.len()
        );
        Ok(collection)
    }
}

impl TryFrom<JsonValue> for Collection {
    type Error = ModelError;

    fn try_from(value: JsonValue) -> Result<Self> {
        decode_collection(value, &CodecConfig::default())
    }
}

impl TryFrom<JsonValue> for Item {
    type Error = ModelError;

    fn try_from(value: JsonValue) -> Result<Self> {
        decode_item(value, &CodecConfig::default())
    }
}

impl<'de> Deserialize<'de> for Collection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = JsonValue::deserialize(deserializer)?;
        Collection::try_from(value).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Item {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = JsonValue::deserialize(deserializer)?;
        Item::try_from(value).map_err(de::Error::custom)
    }
}
