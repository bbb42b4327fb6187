use serde_json::{json, Map, Value};

use crate::domain::DomainError;

const DEFAULT_MODEL: &str = "gpt-4o";
const DEFAULT_MAX_TOKENS: u32 = 100;
const DEFAULT_TEMPERATURE: f64 = 0.7;

const INVALID_INPUT: &str = "Invalid input. Please provide a JSON with a prompt.";

/// Prompt submitted to the relay endpoint
///
/// Only `prompt` is required. The optional fields are forwarded upstream
/// exactly as the caller sent them, explicit `null` included, so the
/// provider is the one to judge their types. `messages`, when given,
/// replaces the single prompt message.
#[derive(Debug, Clone)]
pub struct RelayRequest {
    pub prompt: Value,
    pub model: Option<Value>,
    pub messages: Option<Value>,
    pub max_tokens: Option<Value>,
    pub temperature: Option<Value>,
}

impl RelayRequest {
    /// Parse a raw request body, rejecting anything without a prompt
    pub fn from_body(body: &[u8]) -> Result<Self, DomainError> {
        let value: Value =
            serde_json::from_slice(body).map_err(|_| DomainError::validation(INVALID_INPUT))?;

        let mut fields: Map<String, Value> = match value {
            Value::Object(map) => map,
            _ => return Err(DomainError::validation(INVALID_INPUT)),
        };

        let prompt = fields
            .remove("prompt")
            .ok_or_else(|| DomainError::validation(INVALID_INPUT))?;

        Ok(Self {
            prompt,
            model: fields.remove("model"),
            messages: fields.remove("messages"),
            max_tokens: fields.remove("max_tokens"),
            temperature: fields.remove("temperature"),
        })
    }

    /// Body sent to the OpenAI-compatible endpoint
    pub fn upstream_payload(&self) -> Value {
        let messages = self.messages.clone().unwrap_or_else(|| {
            json!([{
                "role": "user",
                "content": self.prompt,
            }])
        });

        json!({
            "model": self.model.clone().unwrap_or_else(|| json!(DEFAULT_MODEL)),
            "messages": messages,
            "max_tokens": self.max_tokens.clone().unwrap_or_else(|| json!(DEFAULT_MAX_TOKENS)),
            "temperature": self.temperature.clone().unwrap_or_else(|| json!(DEFAULT_TEMPERATURE)),
        })
    }
}
