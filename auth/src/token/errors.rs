use thiserror::Error;

/// Error type for access-token operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    /// Claim serialization failed while issuing. Treated as a programmer
    /// error by callers; it cannot be triggered by request input.
    #[error("failed to encode token: {0}")]
    EncodingFailed(String),

    /// The signature does not match the current signing secret.
    #[error("token signature is invalid")]
    InvalidSignature,

    /// The expiry timestamp has elapsed. No grace window is applied.
    #[error("token is expired")]
    TokenExpired,

    /// Not a structurally valid compact JWT (three non-empty segments).
    #[error("token is malformed: {0}")]
    MalformedToken(String),

    /// The subject claim is not a well-formed principal identifier.
    #[error("token subject is not a valid principal id: {0}")]
    MalformedSubject(String),
}
