//! Verification channel, provider-reported status and outcome.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Delivery channel for one-time codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerificationChannel {
    #[default]
    Sms,
}

impl VerificationChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationChannel::Sms => "sms",
        }
    }
}

impl fmt::Display for VerificationChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of a verification as reported by the provider
///
/// Known values get their own variant; anything else is kept verbatim in
/// `Other` so it can be echoed back to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationStatus {
    Pending,
    Approved,
    Canceled,
    MaxAttemptsReached,
    Deleted,
    Failed,
    Expired,
    Other(String),
}

impl VerificationStatus {
    /// Parse a status string exactly as the provider sent it
    pub fn from_provider(raw: &str) -> Self {
        match raw {
            "pending" => Self::Pending,
            "approved" => Self::Approved,
            "canceled" => Self::Canceled,
            "max_attempts_reached" => Self::MaxAttemptsReached,
            "deleted" => Self::Deleted,
            "failed" => Self::Failed,
            "expired" => Self::Expired,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Canceled => "canceled",
            Self::MaxAttemptsReached => "max_attempts_reached",
            Self::Deleted => "deleted",
            Self::Failed => "failed",
            Self::Expired => "expired",
            Self::Other(raw) => raw,
        }
    }

    /// The only status that unlocks the verified-phone write
    pub fn is_approved(&self) -> bool {
        matches!(self, Self::Approved)
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for VerificationStatus {
    fn from(raw: &str) -> Self {
        Self::from_provider(raw)
    }
}

impl Serialize for VerificationStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for VerificationStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_provider(&raw))
    }
}

/// Result of a start or check call against the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationOutcome {
    pub status: VerificationStatus,
    /// Provider-side verification SID, when reported
    pub sid: Option<String>,
}

impl VerificationOutcome {
    pub fn new(status: VerificationStatus) -> Self {
        Self { status, sid: None }
    }

    pub fn with_sid(mut self, sid: impl Into<String>) -> Self {
        self.sid = Some(sid.into());
        self
    }
}
