use k256::ecdsa::{signature::hazmat::PrehashVerifier, Signature, VerifyingKey};

use super::canonical::{self, JsonObject};
use super::signer::digest;
use super::{codec, AuthError, TokenParts};

/// Header and payload of a token whose signature checked out
#[derive(Debug, Clone, PartialEq)]
pub struct VerifiedToken {
    pub header: JsonObject,
    pub payload: JsonObject,
}

/// Verify a token and return its claims
pub fn verify(token: &str, key: &VerifyingKey) -> Result<JsonObject, AuthError> {
    verify_token(token, key).map(|verified| verified.payload)
}

/// Verify a token and return both decoded segments
///
/// The digest covers the header and payload segments exactly as they
/// appear in `token`. Segments are decoded only after the signature
/// matches.
pub fn verify_token(token: &str, key: &VerifyingKey) -> Result<VerifiedToken, AuthError> {
    let parts = TokenParts::parse(token)?;

    let signature_bytes = codec::decode(parts.signature)
        .map_err(|e| AuthError::malformed(format!("signature segment: {}", e)))?;
    let signature = Signature::from_der(&signature_bytes)
        .map_err(|_| AuthError::malformed("signature is not a DER-encoded ECDSA signature"))?;

    key.verify_prehash(&digest(parts.signing_input.as_bytes()), &signature)
        .map_err(|_| AuthError::InvalidSignature)?;

    Ok(VerifiedToken {
        header: decode_segment(parts.header, "header")?,
        payload: decode_segment(parts.payload, "payload")?,
    })
}

fn decode_segment(segment: &str, name: &str) -> Result<JsonObject, AuthError> {
    let bytes = codec::decode(segment)
        .map_err(|e| AuthError::malformed(format!("{} segment: {}", name, e)))?;

    canonical::deserialize(&bytes)
        .map_err(|e| AuthError::malformed(format!("{} segment: {}", name, e)))
}
