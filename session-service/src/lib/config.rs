use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// HS256 signing secret shared by every issued access token.
    /// Never logged, never returned in a response.
    pub jwt_secret: String,

    /// Static key presented by the service-to-service webhook caller.
    pub api_key: String,

    /// Access-token lifetime. Short on purpose; an access token cannot be
    /// revoked, so this bounds the compromise window.
    #[serde(default = "default_access_token_ttl_seconds")]
    pub access_token_ttl_seconds: i64,

    /// Renewal-token lifetime.
    #[serde(default = "default_refresh_token_ttl_hours")]
    pub refresh_token_ttl_hours: i64,
}

fn default_access_token_ttl_seconds() -> i64 {
    3600
}

fn default_refresh_token_ttl_hours() -> i64 {
    1440
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (AUTH__JWT_SECRET, AUTH__API_KEY, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: AUTH__JWT_SECRET=... overrides auth.jwt_secret
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;

        Ok(config)
    }
}
