//! # Infrastructure Layer
//!
//! Concrete implementations of the two collaborators the verification
//! service depends on:
//! - **Twilio**: Verify and Messaging REST client over `reqwest`
//! - **Database**: MySQL profile store using SQLx
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Twilio module - verification provider client
pub mod twilio;

mod bootstrap;

pub use bootstrap::build_provider;
#[cfg(feature = "mysql")]
pub use database::{DatabasePool, MySqlProfileRepository};
pub use twilio::TwilioVerifyClient;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// HTTP client construction error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
