//! API middleware components

pub mod jws_auth;
pub mod logging;

pub use jws_auth::{require_jws, JwsClaims};
pub use logging::logging_middleware;
