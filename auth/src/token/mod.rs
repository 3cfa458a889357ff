pub mod claims;
pub mod codec;
pub mod errors;

pub use claims::Claims;
pub use claims::TOKEN_ISSUER;
pub use codec::AccessTokenCodec;
pub use errors::TokenError;
