//! ES256K token gateway
//!
//! Issues compact tokens signed with secp256k1 ECDSA, guards routes on
//! their verification, and relays prompts to an OpenAI-compatible API:
//! - Stateless issuance and verification over one process key pair
//! - Explicit middleware composition for protected routes
//! - Layered configuration and structured logging

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;
use std::time::Duration;

use api::state::AppState;
use infrastructure::{
    auth::TokenAuthority,
    llm::{HttpClient, OpenAiRelay},
};
use tracing::info;

/// Create the application state with custom configuration
pub fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let authority = TokenAuthority::from_config(&config.auth)?;

    let client = HttpClient::with_timeout(Duration::from_secs(config.llm.timeout_secs))?;
    let relay = OpenAiRelay::new(client, config.llm.api_url.clone(), config.llm.api_key.clone());

    info!(
        llm_url = %config.llm.api_url,
        key_fingerprint = %authority.fingerprint(),
        "Application state initialized"
    );

    Ok(AppState::new(authority, Arc::new(relay)))
}
