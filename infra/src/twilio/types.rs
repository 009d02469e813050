//! Wire types for Twilio responses

use serde::Deserialize;

/// Verification resource returned by the Verify API
///
/// Only the fields the service uses are decoded; Twilio returns many more.
#[derive(Debug, Clone, Deserialize)]
pub struct TwilioVerification {
    pub sid: Option<String>,
    pub status: String,
}

/// Message resource returned by the Messaging API
#[derive(Debug, Clone, Deserialize)]
pub struct TwilioMessage {
    pub sid: String,
}

/// Error body Twilio sends with non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct TwilioErrorBody {
    pub code: Option<u32>,
    pub message: Option<String>,
}
