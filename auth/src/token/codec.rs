use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use uuid::Uuid;

use super::claims::Claims;
use super::errors::TokenError;

/// Issues and verifies access tokens (HS256 compact JWT serialization).
///
/// The signing secret is supplied at construction and never read from
/// ambient state, so the codec stays a pure function of its inputs. Access
/// tokens are stateless and cannot be revoked; the short TTL is the only
/// mitigation for a leaked token.
pub struct AccessTokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl AccessTokenCodec {
    /// Create a codec keyed by a signing secret.
    ///
    /// The secret should be at least 256 bits and must never be logged or
    /// returned in a response.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Issue a signed access token for a principal, valid for `ttl`.
    ///
    /// # Errors
    /// * `EncodingFailed` - claim serialization failed
    pub fn issue(&self, user_id: Uuid, ttl: Duration) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);
        let claims = Claims::new(user_id, ttl);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify a token and return the principal it names.
    ///
    /// Rejects on signature mismatch, on structural problems, and the
    /// instant the expiry timestamp is reached: a token with
    /// `exp <= now` is already dead.
    ///
    /// # Errors
    /// * `InvalidSignature` - signed with a different secret
    /// * `TokenExpired` - expiry timestamp elapsed
    /// * `MalformedToken` - not a three-segment compact JWT
    /// * `MalformedSubject` - subject claim is not a UUID
    pub fn verify(&self, token: &str) -> Result<Uuid, TokenError> {
        // Structural gate before any cryptography: exactly three non-empty
        // segments. Without this, an empty signature segment would surface
        // as a signature mismatch rather than a malformed token.
        let mut segments = token.split('.');
        if segments.clone().count() != 3 || segments.any(str::is_empty) {
            return Err(TokenError::MalformedToken(
                "expected three non-empty dot-separated segments".to_string(),
            ));
        }

        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                    ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                    _ => TokenError::MalformedToken(e.to_string()),
                }
            })?;

        // Exact-boundary check: the library treats exp == now as still
        // valid, this service does not.
        if token_data.claims.exp <= Utc::now().timestamp() {
            return Err(TokenError::TokenExpired);
        }

        Uuid::parse_str(&token_data.claims.sub)
            .map_err(|e| TokenError::MalformedSubject(e.to_string()))
    }
}
