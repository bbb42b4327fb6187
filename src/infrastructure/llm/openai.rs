use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use super::http_client::HttpClientTrait;
use crate::domain::{DomainError, LlmRelay};

pub const DEFAULT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/completions";

/// Relay to an OpenAI-compatible endpoint
///
/// The URL is used verbatim, so any compatible server can stand in.
#[derive(Debug)]
pub struct OpenAiRelay<C: HttpClientTrait> {
    client: C,
    url: String,
    auth_header: Option<String>,
}

impl<C: HttpClientTrait> OpenAiRelay<C> {
    pub fn new(client: C, url: impl Into<String>, api_key: Option<String>) -> Self {
        let auth_header = api_key
            .filter(|key| !key.trim().is_empty())
            .map(|key| format!("Bearer {}", key));

        if auth_header.is_none() {
            warn!("No LLM API key configured; upstream requests are sent unauthenticated");
        }

        Self {
            client,
            url: url.into(),
            auth_header,
        }
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        let mut headers = vec![("Content-Type", "application/json")];

        if let Some(ref auth) = self.auth_header {
            headers.push(("Authorization", auth.as_str()));
        }

        headers
    }
}

#[async_trait]
impl<C: HttpClientTrait> LlmRelay for OpenAiRelay<C> {
    async fn complete(&self, payload: &Value) -> Result<Value, DomainError> {
        debug!(url = %self.url, model = %payload["model"], "Forwarding completion request");

        self.client
            .post_json(&self.url, self.headers(), payload)
            .await
    }

    fn endpoint(&self) -> &str {
        &self.url
    }
}
