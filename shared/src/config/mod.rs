//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Caller authentication (JWT verification)
//! - `database` - Profile store connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `provider` - Verification provider credentials and endpoints
//! - `server` - HTTP server bind configuration
//!
//! Everything is read from the process environment once at startup.

pub mod auth;
pub mod database;
pub mod environment;
pub mod provider;
pub mod server;

use thiserror::Error;

// Re-export commonly used types
pub use auth::JwtConfig;
pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use provider::ProviderConfig;
pub use server::ServerConfig;

/// Configuration loading errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),

    #[error("missing configuration: {0}")]
    MissingMany(String),

    #[error("{key} {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Complete application configuration
///
/// The provider section is kept as a `Result` on purpose: a server without
/// provider credentials still starts and answers every operation with an
/// internal error instead of refusing to boot.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub logging: LoggingConfig,
    pub provider: Result<ProviderConfig, ConfigError>,
}

impl AppConfig {
    /// Load configuration from environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        let mut logging = LoggingConfig::for_environment(environment);
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            logging.level = level;
        }

        Ok(Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env()?,
            jwt: JwtConfig::from_env()?,
            logging,
            provider: ProviderConfig::from_env(),
        })
    }
}

/// Read and parse an environment variable, falling back on absence or parse failure
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
