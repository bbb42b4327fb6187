//! Infrastructure layer - External service implementations

pub mod auth;
pub mod llm;
pub mod logging;
