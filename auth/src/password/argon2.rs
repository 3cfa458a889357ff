use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// One-way credential hasher (Argon2id).
///
/// Every call to [`hash`](Self::hash) draws a fresh random salt, so hashing
/// the same plaintext twice yields two different strings that both verify.
/// The cost parameters are intentionally expensive; login throughput is
/// bounded by them.
pub struct PasswordHasher;

impl PasswordHasher {
    /// Create a new password hasher with the default cost parameters.
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password for storage.
    ///
    /// Accepts any UTF-8 string, including the empty string.
    ///
    /// # Returns
    /// PHC string format hash (algorithm identifier, cost, salt, and digest)
    ///
    /// # Errors
    /// * `HashingFailed` - internal hashing failure
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a plaintext password against a stored hash.
    ///
    /// Recomputes the digest with the cost and salt embedded in `hash`; the
    /// comparison is constant-time.
    ///
    /// # Errors
    /// * `Mismatch` - the password does not match
    /// * `MalformedHash` - `hash` is not a parseable PHC string
    pub fn verify(&self, password: &str, hash: &str) -> Result<(), PasswordError> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| PasswordError::MalformedHash(e.to_string()))?;

        let argon2 = Argon2::default();

        argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|e| match e {
                argon2::password_hash::Error::Password => PasswordError::Mismatch,
                other => PasswordError::MalformedHash(other.to_string()),
            })
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let password = "my_secure_password";

        let hash = hasher.hash(password).expect("Failed to hash password");

        assert!(hasher.verify(password, &hash).is_ok());
        assert_eq!(
            hasher.verify("wrong_password", &hash),
            Err(PasswordError::Mismatch)
        );
    }

    #[test]
    fn test_hash_is_salted() {
        let hasher = PasswordHasher::new();
        let password = "same_password";

        let first = hasher.hash(password).expect("Failed to hash password");
        let second = hasher.hash(password).expect("Failed to hash password");

        // Fresh salt per call, so the strings differ but both verify.
        assert_ne!(first, second);
        assert!(hasher.verify(password, &first).is_ok());
        assert!(hasher.verify(password, &second).is_ok());
    }

    #[test]
    fn test_hash_empty_password() {
        let hasher = PasswordHasher::new();

        let hash = hasher.hash("").expect("Failed to hash empty password");
        assert!(hasher.verify("", &hash).is_ok());
        assert_eq!(
            hasher.verify("not_empty", &hash),
            Err(PasswordError::Mismatch)
        );
    }

    #[test]
    fn test_verify_malformed_hash() {
        let hasher = PasswordHasher::new();
        let result = hasher.verify("password", "invalid_hash");
        assert!(matches!(result, Err(PasswordError::MalformedHash(_))));
    }
}
