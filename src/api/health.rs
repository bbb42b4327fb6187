//! Health check endpoints

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use super::state::AppState;

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: String,
    /// Public fingerprint of the signing key, for telling restarts apart
    pub key_fingerprint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinned_algorithm: Option<String>,
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION").to_string(),
        key_fingerprint: state.authority.fingerprint(),
        pinned_algorithm: state.authority.pinned_algorithm().map(str::to_string),
    };

    (StatusCode::OK, Json(response))
}

/// GET /live
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}
