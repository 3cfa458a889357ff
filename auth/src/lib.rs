//! Session-authentication core
//!
//! Synchronous, storage-free building blocks for authenticating a multi-user
//! HTTP service:
//! - Password hashing (Argon2id)
//! - Access-token issuing and verification (HS256 compact JWT)
//! - Renewal-token generation and lifecycle rules
//! - Credential extraction from request headers
//!
//! The service layer composes these with its own storage ports; nothing in
//! this crate performs I/O or holds shared mutable state, so a single
//! instance of each type can serve every concurrent request.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).is_ok());
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::AccessTokenCodec;
//! use chrono::Duration;
//! use uuid::Uuid;
//!
//! let codec = AccessTokenCodec::new(b"secret_key_at_least_32_bytes_long!");
//! let user_id = Uuid::new_v4();
//! let token = codec.issue(user_id, Duration::hours(1)).unwrap();
//! assert_eq!(codec.verify(&token).unwrap(), user_id);
//! ```
//!
//! ## Header Extraction
//! ```
//! use auth::extract;
//! use http::HeaderMap;
//!
//! let mut headers = HeaderMap::new();
//! headers.insert(http::header::AUTHORIZATION, "Bearer TOKEN".parse().unwrap());
//! assert_eq!(extract::bearer_token(&headers).unwrap(), "TOKEN");
//! ```

pub mod extract;
pub mod password;
pub mod refresh;
pub mod token;

// Re-export commonly used items
pub use extract::ExtractError;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use refresh::RefreshTokenRecord;
pub use token::AccessTokenCodec;
pub use token::Claims;
pub use token::TokenError;
