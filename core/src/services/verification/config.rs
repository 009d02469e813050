//! Configuration for the phone verification service

use pv_shared::config::provider::DEFAULT_TEST_NOTIFICATION_BODY;

/// Reply returned to the caller after a test notification is dispatched
pub const TEST_NOTIFICATION_REPLY: &str = "Test SMS sent!";

/// Configuration for the phone verification service
#[derive(Debug, Clone)]
pub struct PhoneVerificationConfig {
    /// Body of the SMS sent by SendTestNotification
    pub test_notification_body: String,
    /// Message returned to the caller once the test SMS is accepted
    pub test_notification_reply: String,
}

impl Default for PhoneVerificationConfig {
    fn default() -> Self {
        Self {
            test_notification_body: DEFAULT_TEST_NOTIFICATION_BODY.to_string(),
            test_notification_reply: TEST_NOTIFICATION_REPLY.to_string(),
        }
    }
}

impl PhoneVerificationConfig {
    /// Override the test notification body
    pub fn with_test_notification_body(mut self, body: impl Into<String>) -> Self {
        self.test_notification_body = body.into();
        self
    }
}
