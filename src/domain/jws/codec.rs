//! Base64url codec used for every token segment

use base64::{
    engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD},
    Engine,
};
use thiserror::Error;

/// Input was not valid base64url, even after padding was restored
#[derive(Debug, Error)]
#[error("invalid base64url: {0}")]
pub struct DecodeError(#[from] base64::DecodeError);

/// Encode bytes as unpadded base64url
pub fn encode(bytes: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode base64url, restoring any stripped `=` padding first
pub fn decode(input: &str) -> Result<Vec<u8>, DecodeError> {
    let padding = (4 - input.len() % 4) % 4;

    let mut padded = String::with_capacity(input.len() + padding);
    padded.push_str(input);
    padded.extend(std::iter::repeat_n('=', padding));

    Ok(URL_SAFE.decode(padded)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_boundary_lengths() {
        for len in 0..=5usize {
            let bytes: Vec<u8> = (0..len as u8).map(|b| b.wrapping_mul(97)).collect();
            let encoded = encode(&bytes);
            assert_eq!(decode(&encoded).unwrap(), bytes, "length {}", len);
        }
    }

    #[test]
    fn test_encode_strips_padding() {
        assert_eq!(encode(b"a"), "YQ");
        assert_eq!(encode(b"ab"), "YWI");
        assert_eq!(encode(b"abc"), "YWJj");
        assert!(!encode(b"abcd").contains('='));
    }

    #[test]
    fn test_encode_uses_url_safe_alphabet() {
        let encoded = encode([0xfb, 0xff, 0xfe]);
        assert_eq!(encoded, "-__-");
    }

    #[test]
    fn test_decode_accepts_padded_input() {
        assert_eq!(decode("YQ==").unwrap(), b"a");
        assert_eq!(decode("YQ").unwrap(), b"a");
    }

    #[test]
    fn test_decode_rejects_invalid_input() {
        assert!(decode("a").is_err());
        assert!(decode("Y*Q").is_err());
        assert!(decode("+/+/").is_err());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(encode(b""), "");
        assert!(decode("").unwrap().is_empty());
    }
}
