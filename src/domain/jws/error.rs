use thiserror::Error;

/// Reasons a request fails token authorization
///
/// Every variant is terminal and maps to a 401 at the HTTP boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Missing Authorization header")]
    MissingCredential,

    #[error("Invalid Authorization header")]
    MalformedCredential,

    #[error("Malformed token: {0}")]
    MalformedToken(String),

    #[error("Invalid signature")]
    InvalidSignature,
}

impl AuthError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedToken(message.into())
    }

    /// Stable machine-readable code for error responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingCredential => "missing_credential",
            Self::MalformedCredential => "malformed_credential",
            Self::MalformedToken(_) => "malformed_token",
            Self::InvalidSignature => "invalid_signature",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            AuthError::MissingCredential.to_string(),
            "Missing Authorization header"
        );
        assert_eq!(
            AuthError::MalformedCredential.to_string(),
            "Invalid Authorization header"
        );
        assert_eq!(
            AuthError::malformed("token must have 3 parts").to_string(),
            "Malformed token: token must have 3 parts"
        );
        assert_eq!(AuthError::InvalidSignature.to_string(), "Invalid signature");
    }

    #[test]
    fn test_codes() {
        assert_eq!(AuthError::MissingCredential.code(), "missing_credential");
        assert_eq!(AuthError::MalformedCredential.code(), "malformed_credential");
        assert_eq!(AuthError::malformed("x").code(), "malformed_token");
        assert_eq!(AuthError::InvalidSignature.code(), "invalid_signature");
    }
}
