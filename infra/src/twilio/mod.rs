//! Twilio verification provider
//!
//! Talks to two Twilio REST surfaces with one HTTP client:
//! - Verify v2 to start and check one-time codes
//! - Messaging 2010-04-01 to send the test notification

mod client;
mod types;

#[cfg(test)]
mod tests;

pub use client::TwilioVerifyClient;
pub use types::{TwilioErrorBody, TwilioMessage, TwilioVerification};
