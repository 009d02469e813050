//! Verification provider (Twilio) configuration

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::utils::phone::is_valid_international_phone;

pub const DEFAULT_VERIFY_BASE_URL: &str = "https://verify.twilio.com";
pub const DEFAULT_API_BASE_URL: &str = "https://api.twilio.com";
pub const DEFAULT_TEST_NOTIFICATION_BODY: &str =
    "This is a test notification. Your phone number is verified.";

/// Credentials and endpoints for the verification provider
#[derive(Clone, Deserialize, Serialize)]
pub struct ProviderConfig {
    /// Twilio Account SID
    pub account_sid: String,
    /// Twilio Auth Token
    pub auth_token: String,
    /// Twilio Verify service SID
    pub verify_service_sid: String,
    /// Sender for test notifications; only SendTestNotification needs it
    pub from_number: Option<String>,
    /// Base URL of the Verify API
    pub verify_base_url: String,
    /// Base URL of the Messaging API
    pub api_base_url: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
    /// Fixed body of the test notification
    pub test_notification_body: String,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"<redacted>")
            .field("verify_service_sid", &self.verify_service_sid)
            .field("from_number", &self.from_number)
            .field("verify_base_url", &self.verify_base_url)
            .field("api_base_url", &self.api_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("test_notification_body", &self.test_notification_body)
            .finish()
    }
}

impl ProviderConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup
    ///
    /// Empty values count as missing. The three Verify credentials are
    /// checked together so the error names every absent one. The sender is
    /// optional here and validated by [`ProviderConfig::sender`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let account_sid = get("TWILIO_ACCOUNT_SID");
        let auth_token = get("TWILIO_AUTH_TOKEN");
        let verify_service_sid = get("TWILIO_VERIFY_SERVICE_SID");

        let (account_sid, auth_token, verify_service_sid) =
            match (account_sid, auth_token, verify_service_sid) {
                (Some(a), Some(t), Some(s)) => (a, t, s),
                (a, t, s) => {
                    let missing = [
                        ("TWILIO_ACCOUNT_SID", a.is_none()),
                        ("TWILIO_AUTH_TOKEN", t.is_none()),
                        ("TWILIO_VERIFY_SERVICE_SID", s.is_none()),
                    ]
                    .iter()
                    .filter(|(_, absent)| *absent)
                    .map(|(key, _)| *key)
                    .collect::<Vec<_>>()
                    .join(", ");
                    return Err(ConfigError::MissingMany(missing));
                }
            };

        let request_timeout_secs = match get("TWILIO_REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                key: "TWILIO_REQUEST_TIMEOUT_SECS",
                reason: format!("not a number of seconds: {}", raw),
            })?,
            None => 10,
        };

        Ok(Self {
            account_sid,
            auth_token,
            verify_service_sid,
            from_number: get("TWILIO_FROM_NUMBER"),
            verify_base_url: get("TWILIO_VERIFY_BASE_URL")
                .unwrap_or_else(|| DEFAULT_VERIFY_BASE_URL.to_string()),
            api_base_url: get("TWILIO_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            request_timeout_secs,
            test_notification_body: get("TEST_NOTIFICATION_BODY")
                .unwrap_or_else(|| DEFAULT_TEST_NOTIFICATION_BODY.to_string()),
        })
    }

    /// Sender number for outbound messages
    ///
    /// Fails when `TWILIO_FROM_NUMBER` is absent or not in E.164 format.
    pub fn sender(&self) -> Result<&str, ConfigError> {
        let from = self
            .from_number
            .as_deref()
            .ok_or(ConfigError::Missing("TWILIO_FROM_NUMBER"))?;
        if !is_valid_international_phone(from) {
            return Err(ConfigError::Invalid {
                key: "TWILIO_FROM_NUMBER",
                reason: "must be in E.164 format (e.g., +15551234567)".to_string(),
            });
        }
        Ok(from)
    }

    /// Point both APIs at a different host (mock servers, regional edges)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.verify_base_url = base_url.clone();
        self.api_base_url = base_url;
        self
    }
}
