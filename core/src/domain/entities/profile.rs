//! User profile as seen by the verification flow.
//!
//! The profile record is owned by the store and carries other columns this
//! crate never reads or writes. Only the fields below are mapped.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::CallerIdentity;

/// The verification-relevant slice of a user profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Caller identity the profile is keyed by
    pub uid: CallerIdentity,

    /// Last phone number confirmed by the provider
    pub phone: Option<String>,

    /// Whether `phone` passed provider verification
    pub is_phone_verified: bool,

    /// Monotonic write counter used for conditional updates
    pub version: u64,

    /// Timestamp when the profile was last updated
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Creates an unverified profile with no phone
    pub fn new(uid: CallerIdentity) -> Self {
        Self {
            uid,
            phone: None,
            is_phone_verified: false,
            version: 0,
            updated_at: Utc::now(),
        }
    }

    /// The phone number allowed to receive notifications, if any
    pub fn verified_phone(&self) -> Option<&str> {
        if !self.is_phone_verified {
            return None;
        }
        self.phone.as_deref().filter(|p| !p.trim().is_empty())
    }

    /// Records a provider-approved phone and bumps the version
    pub fn mark_phone_verified(&mut self, phone: impl Into<String>) {
        self.phone = Some(phone.into());
        self.is_phone_verified = true;
        self.version += 1;
        self.updated_at = Utc::now();
    }
}
