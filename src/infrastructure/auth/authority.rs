//! Token issuance and authorization over a single process key pair

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::AuthConfig;
use crate::domain::jws::{self, default_header, AuthError, JsonObject, KeyPair};
use crate::domain::DomainError;

/// Issues and authorizes ES256K tokens
///
/// Holds the key pair for the lifetime of the process. Cloning is cheap
/// enough for tests; the server shares one instance behind an `Arc`.
#[derive(Debug, Clone)]
pub struct TokenAuthority {
    key_pair: KeyPair,
    header: JsonObject,
    pinned_algorithm: Option<String>,
}

impl TokenAuthority {
    /// Create an authority issuing `{"alg":"ES256K","typ":"JWT"}` tokens and
    /// accepting only tokens whose header names ES256K
    pub fn new(key_pair: KeyPair) -> Self {
        Self {
            key_pair,
            header: default_header(),
            pinned_algorithm: Some(jws::ES256K.to_string()),
        }
    }

    /// Accept any header `alg` when `None`
    pub fn with_pinned_algorithm(mut self, algorithm: Option<String>) -> Self {
        self.pinned_algorithm = algorithm;
        self
    }

    /// Build from configuration, generating a key pair when none is supplied
    pub fn from_config(config: &AuthConfig) -> Result<Self, DomainError> {
        let key_pair = match config.private_key_hex.as_deref().map(str::trim) {
            Some(hex) if !hex.is_empty() => {
                let key_pair = KeyPair::from_hex(hex).map_err(|e| {
                    DomainError::configuration(format!("auth.private_key_hex: {}", e))
                })?;
                info!(
                    fingerprint = %key_pair.fingerprint(),
                    "Loaded signing key from configuration"
                );
                key_pair
            }
            _ => {
                let key_pair = KeyPair::generate();
                warn!(
                    fingerprint = %key_pair.fingerprint(),
                    "Generated ephemeral signing key; issued tokens will not survive a restart"
                );
                key_pair
            }
        };

        let pinned = config
            .pinned_algorithm
            .as_deref()
            .map(str::trim)
            .filter(|alg| !alg.is_empty())
            .map(str::to_string);

        if pinned.is_none() {
            warn!("Algorithm pinning disabled; token headers are not checked");
        }

        Ok(Self::new(key_pair).with_pinned_algorithm(pinned))
    }

    pub fn key_pair(&self) -> &KeyPair {
        &self.key_pair
    }

    pub fn fingerprint(&self) -> String {
        self.key_pair.fingerprint()
    }

    pub fn pinned_algorithm(&self) -> Option<&str> {
        self.pinned_algorithm.as_deref()
    }

    /// Sign a claim set into a compact token
    pub fn issue(&self, claims: &JsonObject) -> Result<String, DomainError> {
        let token = jws::sign(&self.header, claims, self.key_pair.signing_key())
            .map_err(|e| DomainError::internal(e.to_string()))?;

        debug!(claim_count = claims.len(), "Issued token");

        Ok(token)
    }

    /// Verify a token and return its claims
    pub fn authorize(&self, token: &str) -> Result<JsonObject, AuthError> {
        let verified = jws::verify_token(token, self.key_pair.verifying_key()).inspect_err(|e| {
            debug!(reason = e.code(), "Token rejected");
        })?;

        if let Some(expected) = &self.pinned_algorithm {
            match verified.header.get("alg").and_then(Value::as_str) {
                Some(alg) if alg == expected => {}
                other => {
                    debug!(alg = ?other, "Token rejected for algorithm mismatch");
                    return Err(AuthError::malformed(format!(
                        "unexpected algorithm {}, expected {}",
                        other.unwrap_or("none"),
                        expected
                    )));
                }
            }
        }

        Ok(verified.payload)
    }
}
