//! Application state for shared services

use std::sync::Arc;

use crate::domain::LlmRelay;
use crate::infrastructure::auth::TokenAuthority;

/// Shared, read-only state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub authority: Arc<TokenAuthority>,
    pub llm_relay: Arc<dyn LlmRelay>,
}

impl AppState {
    pub fn new(authority: TokenAuthority, llm_relay: Arc<dyn LlmRelay>) -> Self {
        Self {
            authority: Arc::new(authority),
            llm_relay,
        }
    }
}
