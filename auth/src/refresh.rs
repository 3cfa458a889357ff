//! Renewal-token generation and lifecycle rules.
//!
//! A renewal token is the opposite of an access token: opaque, long-lived,
//! and backed entirely by a server-side record. This module owns the record
//! shape and its validity rules; persisting the record belongs to the
//! storage collaborator.

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use rand::rngs::OsRng;
use rand::RngCore;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// Entropy carried by a renewal token, in bytes.
const TOKEN_BYTES: usize = 32;

/// Generate an opaque renewal token: 256 bits from the OS RNG, hex-encoded.
///
/// The token embeds no claims and no structure.
pub fn generate() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Server-persisted renewal-token record.
///
/// State machine: Active -> Revoked (terminal) is the only persisted
/// transition. Expiry is derived from `expires_at` at read time and never
/// written back. No transition returns a record to Active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshTokenRecord {
    /// Opaque token string; the record's lookup key.
    pub token: String,
    /// Owning principal.
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    /// Set once by [`revoke`](Self::revoke), never cleared.
    pub revoked_at: Option<DateTime<Utc>>,
}

impl RefreshTokenRecord {
    /// Build a fresh record for `user_id`, expiring `ttl` from now.
    pub fn new(user_id: Uuid, token: String, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            token,
            user_id,
            created_at: now,
            expires_at: now + ttl,
            revoked_at: None,
        }
    }

    /// Whether the record may still be exchanged for a new access token:
    /// not revoked and not past its expiry timestamp.
    pub fn is_usable(&self, now: DateTime<Utc>) -> bool {
        self.revoked_at.is_none() && now < self.expires_at
    }

    /// Mark the record revoked and return the effective revocation time.
    ///
    /// First revocation wins: revoking an already-revoked record is a no-op
    /// that keeps the original timestamp.
    pub fn revoke(&mut self, now: DateTime<Utc>) -> DateTime<Utc> {
        *self.revoked_at.get_or_insert(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_unique_and_opaque() {
        let first = generate();
        let second = generate();

        assert_ne!(first, second);
        assert_eq!(first.len(), TOKEN_BYTES * 2); // hex doubles the length
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_usable_after_creation() {
        let record = RefreshTokenRecord::new(Uuid::new_v4(), generate(), Duration::hours(1440));
        assert!(record.is_usable(Utc::now()));
    }

    #[test]
    fn test_unusable_after_revoke() {
        let mut record =
            RefreshTokenRecord::new(Uuid::new_v4(), generate(), Duration::hours(1440));

        record.revoke(Utc::now());
        assert!(!record.is_usable(Utc::now()));
    }

    #[test]
    fn test_unusable_at_and_after_expiry() {
        let record = RefreshTokenRecord::new(Uuid::new_v4(), generate(), Duration::hours(1));

        assert!(!record.is_usable(record.expires_at));
        assert!(!record.is_usable(record.expires_at + Duration::seconds(1)));
    }

    #[test]
    fn test_revoke_twice_keeps_first_timestamp() {
        let mut record =
            RefreshTokenRecord::new(Uuid::new_v4(), generate(), Duration::hours(1440));

        let first = record.revoke(Utc::now());
        let second = record.revoke(Utc::now() + Duration::seconds(10));

        assert_eq!(first, second);
        assert_eq!(record.revoked_at, Some(first));
        assert!(!record.is_usable(Utc::now()));
    }
}
