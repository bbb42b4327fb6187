//! Compact ES256K tokens
//!
//! Tokens have the shape `b64url(header).b64url(payload).b64url(signature)`.
//! The signature is a DER-encoded secp256k1 ECDSA signature over the
//! SHA-256 digest of the first two segments joined by a dot.

pub mod canonical;
pub mod codec;
mod error;
mod key_pair;
mod signer;
mod token;
mod verifier;

pub use canonical::{DeserializeError, JsonObject};
pub use codec::DecodeError;
pub use error::AuthError;
pub use key_pair::{KeyError, KeyPair};
pub use signer::{sign, SigningError};
pub use token::TokenParts;
pub use verifier::{verify, verify_token, VerifiedToken};

/// Algorithm identifier carried in the header of issued tokens
pub const ES256K: &str = "ES256K";

/// Header used for every token issued by the gateway
pub fn default_header() -> JsonObject {
    let mut header = JsonObject::new();
    header.insert("alg".to_string(), ES256K.into());
    header.insert("typ".to_string(), "JWT".into());
    header
}
