//! Untyped JSON to model conversion
//!
//! Nested objects are dispatched on their `$type` tag: `collection` and
//! `symlink` become typed items, anything else is kept as a plain object.

use log::warn;
use serde_json::{Map, Value as JsonValue};

use super::{CodecConfig, json_type_name};
use crate::collection::{COLLECTION_KIND, Collection};
use crate::core::symlink::SYMLINK_KIND;
use crate::core::{Item, ModelError, Result, Symlink};

pub(crate) fn decode_collection(value: JsonValue, config: &CodecConfig) -> Result<Collection> {
    let JsonValue::Object(mut obj) = value else {
        return Err(ModelError::invalid(
            "collection",
            format!(
                "Expecting collection to be an object, got {}",
                json_type_name(&value)
            ),
        ));
    };

    check_type_tag(&mut obj, COLLECTION_KIND)?;

    let mut collection = Collection::new();
    if let Some(id) = obj.remove("$id") {
        collection.set_id_value(&id)?;
    }
    if let Some(items) = obj.remove("items") {
        collection.apply_items_value(&items, config)?;
    }
    if let Some(expires) = obj.remove("$expires") {
        collection.set_expires_value(&expires)?;
    }
    if let Some(total) = obj.remove("total") {
        collection.set_total_value(&total)?;
    }
    if let Some(limit) = obj.remove("limit") {
        collection.set_limit_value(&limit)?;
    }

    reject_or_skip_unknown(&obj, COLLECTION_KIND, config)?;
    Ok(collection)
}

pub(crate) fn decode_item(value: JsonValue, config: &CodecConfig) -> Result<Item> {
    match value {
        JsonValue::Null => Ok(Item::Null),
        JsonValue::Bool(b) => Ok(Item::Boolean(b)),
        JsonValue::Number(n) => n
            .as_i64()
            .map(Item::Integer)
            .or_else(|| n.as_f64().map(Item::Float))
            .ok_or_else(|| ModelError::invalid("items", format!("Unsupported number {}", n))),
        JsonValue::String(s) => Ok(Item::Text(s)),
        JsonValue::Array(values) => values
            .into_iter()
            .map(|v| decode_item(v, config))
            .collect::<Result<Vec<_>>>()
            .map(Item::List),
        JsonValue::Object(obj) => {
            let kind = obj
                .get("$type")
                .and_then(JsonValue::as_str)
                .map(str::to_owned);
            match kind.as_deref() {
                Some(COLLECTION_KIND) => {
                    let nested = decode_collection(JsonValue::Object(obj), config)?;
                    Ok(Item::Collection(Box::new(nested)))
                }
                Some(SYMLINK_KIND) => decode_symlink(obj, config).map(Item::Symlink),
                _ => Ok(Item::Object(obj)),
            }
        }
    }
}

fn decode_symlink(mut obj: Map<String, JsonValue>, config: &CodecConfig) -> Result<Symlink> {
    check_type_tag(&mut obj, SYMLINK_KIND)?;

    let link = match obj.remove("$id") {
        Some(JsonValue::String(id)) => Symlink::new(id),
        other => {
            let got = other.as_ref().map_or("undefined", json_type_name);
            return Err(ModelError::invalid(
                "$id",
                format!("Expecting symlink id to be a string, got {}", got),
            ));
        }
    };

    reject_or_skip_unknown(&obj, SYMLINK_KIND, config)?;
    Ok(link)
}

fn check_type_tag(obj: &mut Map<String, JsonValue>, expected: &str) -> Result<()> {
    match obj.remove("$type") {
        None => Ok(()),
        Some(JsonValue::String(kind)) if kind == expected => Ok(()),
        Some(other) => Err(ModelError::invalid(
            "$type",
            format!("Expecting $type to be \"{}\", got {}", expected, other),
        )),
    }
}

fn reject_or_skip_unknown(
    leftover: &Map<String, JsonValue>,
    kind: &str,
    config: &CodecConfig,
) -> Result<()> {
    for key in leftover.keys() {
        if config.deny_unknown_fields {
            return Err(ModelError::invalid(
                "field",
                format!("Unknown {} field '{}'", kind, key),
            ));
        }
        warn!("ignoring unknown {} field '{}'", kind, key);
    }
    Ok(())
}
