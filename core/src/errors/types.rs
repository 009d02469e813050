//! Errors raised by the external collaborators

use thiserror::Error;

/// Failures talking to the verification provider
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// A setting the call depends on is absent or invalid
    #[error("provider not configured: {0}")]
    Config(String),

    /// The request never produced an HTTP response (DNS, TLS, timeout)
    #[error("request to provider failed: {0}")]
    Transport(String),

    /// The provider answered with a non-success status
    #[error("{message}")]
    Api {
        http_status: u16,
        code: Option<u32>,
        message: String,
    },

    /// The provider answered 2xx with a body we could not read
    #[error("unexpected provider response: {0}")]
    Decode(String),
}

/// Failures reading or writing the profile store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A conditional write lost against a concurrent writer
    #[error("profile {uid} was modified concurrently")]
    Conflict { uid: String },

    /// The profile to update does not exist
    #[error("profile {uid} does not exist")]
    NotFound { uid: String },

    #[error("store error: {0}")]
    Backend(String),
}
