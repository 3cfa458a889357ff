use std::sync::Arc;

use chrono::Duration;
use chrono::Utc;
use http::HeaderMap;

use auth::extract;
use auth::refresh;
use auth::AccessTokenCodec;
use auth::PasswordError;
use auth::PasswordHasher;
use auth::RefreshTokenRecord;

use crate::config::AuthConfig;
use crate::session::errors::SessionError;
use crate::session::models::EmailAddress;
use crate::session::models::LoginGrant;
use crate::session::models::UserId;
use crate::session::models::UserProfile;
use crate::session::ports::RefreshTokenStore;
use crate::session::ports::UserDirectory;

/// Authentication façade.
///
/// Composes the hashing, token, and extraction primitives with the two
/// consumed collaborators: the user directory and the renewal-token store.
/// Holds no mutable state of its own; a single instance serves every
/// concurrent request.
pub struct SessionService<U, R>
where
    U: UserDirectory,
    R: RefreshTokenStore,
{
    users: Arc<U>,
    refresh_tokens: Arc<R>,
    hasher: PasswordHasher,
    codec: AccessTokenCodec,
    api_key: String,
    access_token_ttl: Duration,
    refresh_token_ttl: Duration,
}

impl<U, R> SessionService<U, R>
where
    U: UserDirectory,
    R: RefreshTokenStore,
{
    /// Create a session service with injected collaborators.
    ///
    /// The signing secret and API key come from configuration once at
    /// startup and are read-only afterwards.
    pub fn new(users: Arc<U>, refresh_tokens: Arc<R>, config: &AuthConfig) -> Self {
        Self {
            users,
            refresh_tokens,
            hasher: PasswordHasher::new(),
            codec: AccessTokenCodec::new(config.jwt_secret.as_bytes()),
            api_key: config.api_key.clone(),
            access_token_ttl: Duration::seconds(config.access_token_ttl_seconds),
            refresh_token_ttl: Duration::hours(config.refresh_token_ttl_hours),
        }
    }

    /// Authenticate an email/password pair and open a session.
    ///
    /// On success issues an access token, persists a fresh renewal record,
    /// and returns both tokens with the user's public profile. Each login
    /// creates an independent renewal record; concurrent sessions for one
    /// principal are allowed.
    ///
    /// # Errors
    /// * `Unauthorized` - unknown email or wrong password; the two cases
    ///   are indistinguishable to the caller
    /// * `Hashing` - internal hashing failure
    /// * `Store` - the directory or token store failed
    pub async fn login(
        &self,
        email: &EmailAddress,
        password: &str,
    ) -> Result<LoginGrant, SessionError> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| {
                tracing::warn!("rejected login attempt");
                SessionError::Unauthorized
            })?;

        self.hasher
            .verify(password, &user.password_hash)
            .map_err(|e| match e {
                PasswordError::Mismatch => {
                    tracing::warn!("rejected login attempt");
                    SessionError::Unauthorized
                }
                other => SessionError::Hashing(other.to_string()),
            })?;

        let access_token = self.codec.issue(user.id.0, self.access_token_ttl)?;

        let record =
            RefreshTokenRecord::new(user.id.0, refresh::generate(), self.refresh_token_ttl);
        self.refresh_tokens.store(&record).await?;

        tracing::debug!(user_id = %user.id, "session opened");

        Ok(LoginGrant {
            user: UserProfile::from(&user),
            access_token,
            refresh_token: record.token,
        })
    }

    /// Exchange a renewal token for a fresh access token.
    ///
    /// The renewal token itself is not rotated; it stays valid until its
    /// own expiry or an explicit revocation.
    ///
    /// # Errors
    /// * `Credential` - no bearer token in the headers
    /// * `Unauthorized` - unknown, revoked, or expired renewal token
    /// * `Store` - the token store failed
    pub async fn refresh(&self, headers: &HeaderMap) -> Result<String, SessionError> {
        let token = extract::bearer_token(headers)?;

        let record = self
            .refresh_tokens
            .find_by_token(token)
            .await?
            .ok_or(SessionError::Unauthorized)?;

        if !record.is_usable(Utc::now()) {
            tracing::warn!(user_id = %record.user_id, "rejected unusable renewal token");
            return Err(SessionError::Unauthorized);
        }

        Ok(self.codec.issue(record.user_id, self.access_token_ttl)?)
    }

    /// Revoke the renewal token presented as a bearer credential.
    ///
    /// Idempotent from the caller's perspective: revoking an already-revoked
    /// token succeeds and the original revocation timestamp is preserved.
    ///
    /// # Errors
    /// * `Credential` - no bearer token in the headers
    /// * `NotFound` - no record matches the token
    /// * `Store` - the token store failed
    pub async fn revoke(&self, headers: &HeaderMap) -> Result<(), SessionError> {
        let token = extract::bearer_token(headers)?;

        let mut record = self
            .refresh_tokens
            .find_by_token(token)
            .await?
            .ok_or(SessionError::NotFound)?;

        let revoked_at = record.revoke(Utc::now());
        self.refresh_tokens
            .mark_revoked(&record.token, revoked_at)
            .await?;

        tracing::debug!(user_id = %record.user_id, "renewal token revoked");
        Ok(())
    }

    /// Resolve the principal behind a request's bearer access token.
    ///
    /// The precondition gate for every protected route.
    ///
    /// # Errors
    /// * `Credential` - no bearer token in the headers
    /// * `Token` - signature, expiry, or structural rejection by the codec
    pub fn authenticate_request(&self, headers: &HeaderMap) -> Result<UserId, SessionError> {
        let token = extract::bearer_token(headers)?;
        Ok(UserId(self.codec.verify(token)?))
    }

    /// Check the service-to-service API key presented by a webhook caller.
    ///
    /// Exact string equality against the configured value.
    ///
    /// # Errors
    /// * `Credential` - no `ApiKey` credential in the headers
    /// * `Unauthorized` - key does not match
    pub fn verify_api_key(&self, headers: &HeaderMap) -> Result<(), SessionError> {
        let key = extract::api_key(headers)?;

        if key != self.api_key {
            tracing::warn!("rejected webhook caller with wrong API key");
            return Err(SessionError::Unauthorized);
        }

        Ok(())
    }

    /// Hash a plaintext password for storage.
    ///
    /// Exposed for the user-management collaborator's create and
    /// credential-update flows.
    ///
    /// # Errors
    /// * `Hashing` - internal hashing failure
    pub fn hash_password(&self, password: &str) -> Result<String, SessionError> {
        self.hasher
            .hash(password)
            .map_err(|e| SessionError::Hashing(e.to_string()))
    }
}
