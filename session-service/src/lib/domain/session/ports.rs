use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;

use auth::RefreshTokenRecord;

use crate::session::errors::StoreError;
use crate::session::models::EmailAddress;
use crate::session::models::UserRecord;

/// User-credential lookup, consumed from the user-management collaborator.
#[async_trait]
pub trait UserDirectory: Send + Sync + 'static {
    /// Fetch the stored credential record for an email address.
    ///
    /// # Returns
    /// The user record, or `None` when no user has this email
    ///
    /// # Errors
    /// * `Backend` - lookup failed in the storage collaborator
    async fn find_by_email(&self, email: &EmailAddress)
        -> Result<Option<UserRecord>, StoreError>;
}

/// Renewal-token persistence, consumed from the storage collaborator.
///
/// This core owns the record shape and lifecycle rules; the collaborator
/// owns durability. Records are never deleted through this port -- the only
/// mutation is setting the revocation timestamp.
#[async_trait]
pub trait RefreshTokenStore: Send + Sync + 'static {
    /// Persist a freshly created renewal record.
    ///
    /// # Errors
    /// * `Backend` - write failed in the storage collaborator
    async fn store(&self, record: &RefreshTokenRecord) -> Result<(), StoreError>;

    /// Look up a renewal record by its opaque token string.
    ///
    /// # Returns
    /// The record, or `None` when the token is unknown
    ///
    /// # Errors
    /// * `Backend` - lookup failed in the storage collaborator
    async fn find_by_token(&self, token: &str) -> Result<Option<RefreshTokenRecord>, StoreError>;

    /// Persist a revocation timestamp for a record.
    ///
    /// # Errors
    /// * `Backend` - write failed in the storage collaborator
    async fn mark_revoked(
        &self,
        token: &str,
        revoked_at: DateTime<Utc>,
    ) -> Result<(), StoreError>;
}
