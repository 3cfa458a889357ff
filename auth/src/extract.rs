//! Credential extraction from request headers.
//!
//! Pure parsing, no I/O. Every failure collapses to [`MissingCredential`]
//! so callers cannot mistake "absent" for "present but empty".
//!
//! [`MissingCredential`]: ExtractError::MissingCredential

use http::header::AUTHORIZATION;
use http::HeaderMap;
use thiserror::Error;

/// Error type for credential extraction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("no usable credential in request headers")]
    MissingCredential,
}

const BEARER_SCHEME: &str = "Bearer";
const API_KEY_SCHEME: &str = "ApiKey";

/// Extract a user bearer token from `Authorization: Bearer <token>`.
///
/// # Errors
/// * `MissingCredential` - header absent, wrong scheme, or no token part
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, ExtractError> {
    scheme_value(headers, BEARER_SCHEME)
}

/// Extract the service-to-service key from `Authorization: ApiKey <key>`.
///
/// # Errors
/// * `MissingCredential` - header absent, wrong scheme, or no key part
pub fn api_key(headers: &HeaderMap) -> Result<&str, ExtractError> {
    scheme_value(headers, API_KEY_SCHEME)
}

fn scheme_value<'a>(headers: &'a HeaderMap, scheme: &str) -> Result<&'a str, ExtractError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(ExtractError::MissingCredential)?
        .to_str()
        .map_err(|_| ExtractError::MissingCredential)?;

    // The credential is a single field: scheme, one space, token. Anything
    // after further whitespace is not a usable credential.
    match value.split_once(' ') {
        Some((s, credential))
            if s == scheme && !credential.is_empty() && !credential.contains(' ') =>
        {
            Ok(credential)
        }
        _ => Err(ExtractError::MissingCredential),
    }
}
