//! Token endpoints
//!
//! `POST /token` issues a token for the supplied claims and
//! `GET /protected` echoes the claims of a verified bearer token.

use axum::{body::Bytes, extract::State, Json};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

use crate::api::middleware::JwsClaims;
use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::JsonObject;

/// Token issuance response
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Protected route response
#[derive(Debug, Serialize)]
pub struct ProtectedResponse {
    pub message: &'static str,
    pub payload: JsonObject,
}

/// Issue a token
///
/// POST /token
///
/// The body is an optional JSON object of claims. An empty body, `null`
/// or `{}` falls back to the demonstration claims.
pub async fn issue_token(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TokenResponse>, ApiError> {
    let claims = claims_from_body(&body)?;
    let token = state.authority.issue(&claims)?;

    info!(claim_count = claims.len(), "Token issued");

    Ok(Json(TokenResponse { token }))
}

/// Echo the verified claims
///
/// GET /protected
pub async fn protected(JwsClaims(claims): JwsClaims) -> Json<ProtectedResponse> {
    Json(ProtectedResponse {
        message: "You have accessed a protected route!",
        payload: claims,
    })
}

/// Claims issued when the caller supplies none
pub fn default_claims() -> JsonObject {
    match json!({"user": "validator", "role": "validator"}) {
        Value::Object(claims) => claims,
        _ => JsonObject::new(),
    }
}

fn claims_from_body(body: &[u8]) -> Result<JsonObject, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(default_claims());
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(claims)) if !claims.is_empty() => Ok(claims),
        Ok(Value::Object(_)) | Ok(Value::Null) => Ok(default_claims()),
        Ok(_) => Err(ApiError::bad_request("Claims must be a JSON object")),
        Err(e) => Err(ApiError::bad_request(format!("Invalid JSON body: {}", e))),
    }
}
