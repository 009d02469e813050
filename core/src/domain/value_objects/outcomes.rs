//! Payloads returned by the three verification operations.

use serde::{Deserialize, Serialize};

use super::verification::VerificationStatus;

/// Result of RequestVerification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestVerificationResult {
    pub success: bool,
    pub status: VerificationStatus,
}

/// Result of ConfirmVerification
///
/// `success` is true only when the provider approved the code and the
/// profile write went through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmVerificationResult {
    pub success: bool,
    pub status: VerificationStatus,
}

/// Result of SendTestNotification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestNotificationResult {
    pub success: bool,
    pub message: String,
}
