//! Bearer token authorization for protected routes
//!
//! [`require_jws`] wraps a router so that every request must carry
//! `Authorization: Bearer <token>`. Verified claims are placed in the
//! request extensions for that request only and read back with the
//! [`JwsClaims`] extractor.

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap},
    middleware::{self, Next},
    response::Response,
    Router,
};
use tracing::debug;

use crate::api::types::ApiError;
use crate::domain::{AuthError, JsonObject};
use crate::infrastructure::auth::TokenAuthority;

/// Claims of the verified token on the current request
#[derive(Debug, Clone, PartialEq)]
pub struct JwsClaims(pub JsonObject);

impl<S> FromRequestParts<S> for JwsClaims
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<JwsClaims>()
            .cloned()
            .ok_or_else(|| ApiError::internal("Route is not guarded by token authorization"))
    }
}

/// Guard every route of `router` with token authorization
pub fn require_jws<S>(router: Router<S>, authority: Arc<TokenAuthority>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.route_layer(middleware::from_fn_with_state(authority, authorize_request))
}

/// Authorize one request, then hand it to the wrapped route
pub async fn authorize_request(
    State(authority): State<Arc<TokenAuthority>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(request.headers())?.to_string();

    debug!("Validating bearer token");

    let claims = authority.authorize(&token)?;
    request.extensions_mut().insert(JwsClaims(claims));

    Ok(next.run(request).await)
}

/// Extract the bearer token from the Authorization header
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingCredential)?;

    if value.is_empty() {
        return Err(AuthError::MissingCredential);
    }

    let value = value.to_str().map_err(|_| AuthError::MalformedCredential)?;

    parse_bearer(value)
}

/// Accept exactly `<scheme> <token>` with a case-insensitive `Bearer` scheme
pub fn parse_bearer(value: &str) -> Result<&str, AuthError> {
    let mut parts = value.split_whitespace();

    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => Ok(token),
        _ => Err(AuthError::MalformedCredential),
    }
}
