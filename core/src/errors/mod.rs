//! Domain-specific error types and error handling.
//!
//! `DomainError` is the closed set of outcomes a caller can see. Errors from
//! collaborators (`ProviderError`, `StoreError`) never leave the service
//! as-is: they are logged and re-signaled as `DomainError::Internal`.

mod types;

#[cfg(test)]
mod tests;

pub use types::{ProviderError, StoreError};

use pv_shared::errors::error_codes;
use thiserror::Error;

/// Structured errors returned by every verification operation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unauthenticated: {message}")]
    Unauthenticated { message: String },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Failed precondition: {message}")]
    FailedPrecondition { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated { message: message.into() }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument { message: message.into() }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound { message: message.into() }
    }

    pub fn failed_precondition(message: impl Into<String>) -> Self {
        Self::FailedPrecondition { message: message.into() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal { message: message.into() }
    }

    /// Human-readable message without the kind prefix
    pub fn message(&self) -> &str {
        match self {
            Self::Unauthenticated { message }
            | Self::InvalidArgument { message }
            | Self::NotFound { message }
            | Self::FailedPrecondition { message }
            | Self::Internal { message } => message,
        }
    }

    /// Canonical wire status for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unauthenticated { .. } => error_codes::UNAUTHENTICATED,
            Self::InvalidArgument { .. } => error_codes::INVALID_ARGUMENT,
            Self::NotFound { .. } => error_codes::NOT_FOUND,
            Self::FailedPrecondition { .. } => error_codes::FAILED_PRECONDITION,
            Self::Internal { .. } => error_codes::INTERNAL,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
