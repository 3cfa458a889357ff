use thiserror::Error;

/// Error type for password operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    /// Internal hashing failure (entropy exhaustion or similar). Fatal to
    /// the surrounding operation, never caused by the input string itself.
    #[error("password hashing failed: {0}")]
    HashingFailed(String),

    /// The plaintext does not match the stored hash.
    #[error("password does not match stored hash")]
    Mismatch,

    /// The stored hash could not be parsed as a PHC string.
    #[error("stored password hash is malformed: {0}")]
    MalformedHash(String),
}
