//! Shared utilities and common types for the phone verify server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Error codes and the wire error envelope
//! - Phone number utilities (E.164 checks, masking for logs)

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, ConfigError, DatabaseConfig, Environment, JwtConfig, LoggingConfig,
    ProviderConfig, ServerConfig,
};
pub use errors::{error_codes, ErrorBody, ErrorResponse};
pub use utils::phone;
