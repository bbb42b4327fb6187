use std::fmt::{self, Debug};

use k256::ecdsa::{SigningKey, VerifyingKey};
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeyError {
    #[error("private key is not valid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("private key is not a valid secp256k1 scalar")]
    InvalidScalar,
}

/// secp256k1 signing key and its public point
///
/// Built once at startup and shared read-only afterwards.
#[derive(Clone)]
pub struct KeyPair {
    signing_key: SigningKey,
    verifying_key: VerifyingKey,
}

impl KeyPair {
    /// Generate a fresh random key pair
    pub fn generate() -> Self {
        Self::from_signing_key(SigningKey::random(&mut OsRng))
    }

    /// Load a key pair from a hex-encoded 32-byte private scalar
    pub fn from_hex(private_key_hex: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(private_key_hex.trim())?;
        let signing_key = SigningKey::from_slice(&bytes).map_err(|_| KeyError::InvalidScalar)?;

        Ok(Self::from_signing_key(signing_key))
    }

    pub fn from_signing_key(signing_key: SigningKey) -> Self {
        let verifying_key = *signing_key.verifying_key();

        Self {
            signing_key,
            verifying_key,
        }
    }

    pub fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }

    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }

    /// Hex of the private scalar, for operators exporting a key
    pub fn private_key_hex(&self) -> String {
        hex::encode(self.signing_key.to_bytes())
    }

    /// Short public identifier: first 8 bytes of SHA-256 over the compressed point
    pub fn fingerprint(&self) -> String {
        let point = self.verifying_key.to_encoded_point(true);
        let digest = Sha256::digest(point.as_bytes());
        hex::encode(&digest[..8])
    }
}

impl Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("fingerprint", &self.fingerprint())
            .field("signing_key", &"[hidden]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_KEY: &str = "4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";

    #[test]
    fn test_generate_produces_distinct_keys() {
        let a = KeyPair::generate();
        let b = KeyPair::generate();
        assert_ne!(a.private_key_hex(), b.private_key_hex());
        assert_ne!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn test_from_hex_round_trip() {
        let pair = KeyPair::from_hex(TEST_KEY).unwrap();
        assert_eq!(pair.private_key_hex(), TEST_KEY);

        let again = KeyPair::from_hex(&format!("  {}\n", TEST_KEY)).unwrap();
        assert_eq!(again.fingerprint(), pair.fingerprint());
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert!(matches!(
            KeyPair::from_hex("not-hex").unwrap_err(),
            KeyError::Hex(_)
        ));
        assert!(matches!(
            KeyPair::from_hex(&"00".repeat(32)).unwrap_err(),
            KeyError::InvalidScalar
        ));
        assert!(matches!(
            KeyPair::from_hex("abcd").unwrap_err(),
            KeyError::InvalidScalar
        ));
    }

    #[test]
    fn test_fingerprint_shape() {
        let fingerprint = KeyPair::from_hex(TEST_KEY).unwrap().fingerprint();
        assert_eq!(fingerprint.len(), 16);
        assert!(fingerprint.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_debug_hides_private_key() {
        let pair = KeyPair::from_hex(TEST_KEY).unwrap();
        let debug = format!("{:?}", pair);
        assert!(!debug.contains(TEST_KEY));
        assert!(debug.contains("[hidden]"));
        assert!(debug.contains(&pair.fingerprint()));
    }
}
