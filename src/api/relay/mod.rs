//! LLM relay endpoints

use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;
use tracing::{error, info};

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::RelayRequest;

/// Show the configured upstream endpoint
///
/// GET /
pub async fn index(State(state): State<AppState>) -> String {
    format!("OpenAI API URL: {}", state.llm_relay.endpoint())
}

/// Forward a prompt to the upstream LLM and return its JSON verbatim
///
/// POST /test
pub async fn relay_completion(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let request = RelayRequest::from_body(&body)?;
    let payload = request.upstream_payload();

    info!(model = %payload["model"], "Relaying completion request");

    let response = state.llm_relay.complete(&payload).await.map_err(|e| {
        error!(error = %e, "Upstream completion failed");
        ApiError::from(e)
    })?;

    Ok(Json(response))
}
