//! Domain layer - token lifecycle and LLM relay contracts

pub mod error;
pub mod jws;
pub mod llm;

pub use error::DomainError;
pub use jws::{AuthError, JsonObject, KeyPair};
pub use llm::{LlmRelay, RelayRequest};
