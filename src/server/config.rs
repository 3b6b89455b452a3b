//! Environment-based server configuration.

use crate::server::error::config::ConfigError;

static DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Runtime configuration read from environment variables.
pub struct Config {
    /// Database connection URL (`DATABASE_URL`), e.g. `postgres://...` or `sqlite://stockroom.db?mode=rwc`
    pub database_url: String,
    /// Socket address the HTTP server binds to (`BIND_ADDR`), defaults to `0.0.0.0:3000`
    pub bind_addr: String,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` is not set
    /// - `Err(ConfigError::InvalidEnvValue)` - A variable is set but empty or not parseable
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        if database_url.trim().is_empty() {
            return Err(ConfigError::InvalidEnvValue {
                var: "DATABASE_URL".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        if bind_addr.parse::<std::net::SocketAddr>().is_err() {
            return Err(ConfigError::InvalidEnvValue {
                var: "BIND_ADDR".to_string(),
                reason: format!("'{}' is not a valid socket address", bind_addr),
            });
        }

        Ok(Self {
            database_url,
            bind_addr,
        })
    }
}
