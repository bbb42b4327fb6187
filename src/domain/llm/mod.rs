//! LLM relay domain models and traits

mod provider;
mod request;

pub use provider::LlmRelay;
pub use request::RelayRequest;

#[cfg(test)]
pub use provider::mock::MockLlmRelay;
