//! Phone verification service module
//!
//! This module orchestrates the verification lifecycle across the caller,
//! the external verification provider and the profile store:
//! - Requesting a one-time code over SMS
//! - Confirming a code and recording the verified phone
//! - Sending a test notification to a verified phone

mod config;
mod provider;
mod service;

#[cfg(test)]
mod tests;

pub use config::{PhoneVerificationConfig, TEST_NOTIFICATION_REPLY};
pub use provider::{ProviderHandle, VerificationProvider};
pub use service::PhoneVerificationService;
