use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::middleware::{logging_middleware, require_jws};
use super::state::AppState;
use super::{auth, health, relay};

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    let protected = require_jws(
        Router::new().route("/protected", get(auth::protected)),
        state.authority.clone(),
    );

    Router::new()
        .route("/", get(relay::index))
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        .route("/token", post(auth::issue_token))
        .route("/test", post(relay::relay_completion))
        .merge(protected)
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}
