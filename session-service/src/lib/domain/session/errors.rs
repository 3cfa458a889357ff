use thiserror::Error;

use auth::ExtractError;
use auth::TokenError;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("invalid email format: {0}")]
    InvalidFormat(String),
}

/// Failure reported by a storage collaborator behind one of the ports.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl From<anyhow::Error> for StoreError {
    fn from(err: anyhow::Error) -> Self {
        StoreError::Backend(err.to_string())
    }
}

/// Top-level error for session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A credential was present and well formed but does not grant access.
    /// Wrong password, unknown email, and revoked or expired renewal tokens
    /// all surface as this one variant so the error shape cannot be used to
    /// enumerate accounts.
    #[error("unauthorized")]
    Unauthorized,

    /// No renewal record matches the presented token (revoke only).
    #[error("no matching renewal token")]
    NotFound,

    /// No usable credential could be read from the request headers.
    #[error("credential extraction failed: {0}")]
    Credential(#[from] ExtractError),

    /// The access token was rejected by the codec.
    #[error("access token rejected: {0}")]
    Token(#[from] TokenError),

    /// Internal password-hashing failure; fatal to the operation.
    #[error("password hashing failed: {0}")]
    Hashing(String),

    /// A storage collaborator failed.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}
