use super::AuthError;

/// The three raw segments of a compact token
///
/// Segments borrow from the token string; `signing_input` is the exact
/// prefix that was signed, never a re-encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenParts<'a> {
    pub header: &'a str,
    pub payload: &'a str,
    pub signature: &'a str,
    pub signing_input: &'a str,
}

impl<'a> TokenParts<'a> {
    /// Split a token into exactly three dot-delimited segments
    pub fn parse(token: &'a str) -> Result<Self, AuthError> {
        let mut segments = token.split('.');

        match (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) {
            (Some(header), Some(payload), Some(signature), None) => Ok(Self {
                header,
                payload,
                signature,
                signing_input: &token[..header.len() + 1 + payload.len()],
            }),
            _ => Err(AuthError::malformed("token must have 3 parts")),
        }
    }
}

/// Join encoded header and payload into the signing input
pub fn signing_input(encoded_header: &str, encoded_payload: &str) -> String {
    format!("{}.{}", encoded_header, encoded_payload)
}

/// Append the encoded signature to a signing input
pub fn assemble(signing_input: &str, encoded_signature: &str) -> String {
    format!("{}.{}", signing_input, encoded_signature)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_three_parts() {
        let parts = TokenParts::parse("aGVhZA.Ym9keQ.c2ln").unwrap();
        assert_eq!(parts.header, "aGVhZA");
        assert_eq!(parts.payload, "Ym9keQ");
        assert_eq!(parts.signature, "c2ln");
        assert_eq!(parts.signing_input, "aGVhZA.Ym9keQ");
    }

    #[test]
    fn test_parse_rejects_wrong_part_counts() {
        for token in ["", "a", "a.b", "a.b.c.d", "a.b.c.d.e"] {
            let err = TokenParts::parse(token).unwrap_err();
            assert!(
                matches!(err, AuthError::MalformedToken(_)),
                "{:?} should be malformed",
                token
            );
        }
    }

    #[test]
    fn test_parse_allows_empty_segments() {
        let parts = TokenParts::parse("..").unwrap();
        assert_eq!(parts.header, "");
        assert_eq!(parts.signing_input, ".");
    }

    #[test]
    fn test_assemble() {
        let input = signing_input("h", "p");
        assert_eq!(input, "h.p");
        assert_eq!(assemble(&input, "s"), "h.p.s");
    }
}
