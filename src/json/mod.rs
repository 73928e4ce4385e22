//! JSON codec for collections
//!
//! - `config.rs` - codec options (`CodecConfig`)
//! - `decode.rs` - untyped JSON to `Collection` / `Item` conversion
//! - `codec.rs` - encode/decode entry points and serde trait impls

mod codec;
mod config;
mod decode;

pub use config::CodecConfig;
pub(crate) use decode::decode_item;

use serde_json::Value as JsonValue;

/// JSON type name as reported in validation messages.
pub fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
