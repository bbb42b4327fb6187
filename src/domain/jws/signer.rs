use k256::ecdsa::{signature::hazmat::PrehashSigner, Signature, SigningKey};
use sha2::{Digest, Sha256};
use thiserror::Error;

use super::canonical::{self, JsonObject};
use super::{codec, token};

#[derive(Debug, Error)]
pub enum SigningError {
    #[error("failed to serialize token segment: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("ECDSA signing failed: {0}")]
    Signature(#[from] k256::ecdsa::Error),
}

/// SHA-256 of the signing input; the only hash applied before ECDSA
pub(crate) fn digest(signing_input: &[u8]) -> [u8; 32] {
    Sha256::digest(signing_input).into()
}

/// Sign a header and payload, producing a compact token
///
/// Nonces follow RFC 6979, so identical inputs give identical tokens.
pub fn sign(
    header: &JsonObject,
    payload: &JsonObject,
    key: &SigningKey,
) -> Result<String, SigningError> {
    let encoded_header = codec::encode(canonical::serialize(header)?);
    let encoded_payload = codec::encode(canonical::serialize(payload)?);
    let signing_input = token::signing_input(&encoded_header, &encoded_payload);

    let signature: Signature = key.sign_prehash(&digest(signing_input.as_bytes()))?;
    let encoded_signature = codec::encode(signature.to_der().as_bytes());

    Ok(token::assemble(&signing_input, &encoded_signature))
}
