use async_trait::async_trait;
use serde_json::Value;
use std::fmt::Debug;

use crate::domain::DomainError;

/// Forwards completion payloads to an upstream LLM API
#[async_trait]
pub trait LlmRelay: Send + Sync + Debug {
    /// Post a payload and return the upstream JSON response unchanged
    async fn complete(&self, payload: &Value) -> Result<Value, DomainError>;

    /// Upstream endpoint URL
    fn endpoint(&self) -> &str;
}
