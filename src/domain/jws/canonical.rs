//! Compact JSON rendering for token segments
//!
//! Keys keep their insertion order and no insignificant whitespace is
//! emitted. Signer and verifier never need to agree on this rendering
//! after issuance, since verification hashes the received segments as-is.

use serde_json::{Map, Value};
use thiserror::Error;

/// JSON object with insertion-ordered keys
pub type JsonObject = Map<String, Value>;

#[derive(Debug, Error)]
pub enum DeserializeError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),
}

/// Render an object as compact UTF-8 JSON
pub fn serialize(object: &JsonObject) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(object)
}

/// Parse bytes into a JSON object
pub fn deserialize(bytes: &[u8]) -> Result<JsonObject, DeserializeError> {
    match serde_json::from_slice(bytes)? {
        Value::Object(object) => Ok(object),
        other => Err(DeserializeError::NotAnObject(kind(&other))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
