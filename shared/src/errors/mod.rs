//! Shared error codes and the error envelope returned by callable endpoints
//!
//! Errors travel as `{"error": {"status": "...", "message": "..."}}`, the shape
//! callable-function clients already understand.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Canonical status strings used on the wire
pub mod error_codes {
    pub const UNAUTHENTICATED: &str = "UNAUTHENTICATED";
    pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const FAILED_PRECONDITION: &str = "FAILED_PRECONDITION";
    pub const INTERNAL: &str = "INTERNAL";
}

/// Body of a structured error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Canonical status, one of [`error_codes`]
    pub status: String,

    /// Human-readable message
    pub message: String,

    /// When the error was produced
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Standard error envelope used across all callable endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

impl ErrorResponse {
    /// Create a new error response stamped with the current time
    pub fn new(status: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                status: status.into(),
                message: message.into(),
                timestamp: Some(Utc::now()),
            },
        }
    }
}
