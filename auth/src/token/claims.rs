use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Issuer written into every access token this service signs.
pub const TOKEN_ISSUER: &str = "session-service";

/// Claim set carried by an access token.
///
/// Deliberately fixed-shape: issuer, subject, issued-at, and expires-at are
/// always present and nothing else is. The token is self-contained; no
/// server-side state backs it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Issuer (constant service name)
    pub iss: String,

    /// Subject (principal identifier as string)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Build the claim set for a principal with expiry `ttl` from now.
    pub fn new(subject: impl ToString, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            iss: TOKEN_ISSUER.to_string(),
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_claims() {
        let claims = Claims::new("user123", Duration::hours(1));

        assert_eq!(claims.iss, TOKEN_ISSUER);
        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.exp - claims.iat, 60 * 60);
    }

    #[test]
    fn test_zero_ttl_expires_at_issue_time() {
        let claims = Claims::new("user123", Duration::zero());
        assert_eq!(claims.exp, claims.iat);
    }
}
