pub mod errors;
pub mod models;
pub mod ports;
pub mod service;

pub use errors::SessionError;
pub use errors::StoreError;
pub use models::EmailAddress;
pub use models::LoginGrant;
pub use models::UserId;
pub use ports::RefreshTokenStore;
pub use ports::UserDirectory;
pub use service::SessionService;
