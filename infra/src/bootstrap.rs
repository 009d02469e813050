//! Startup wiring for the verification provider

use pv_core::ProviderHandle;
use pv_shared::config::{ConfigError, ProviderConfig};

use crate::twilio::TwilioVerifyClient;

/// Build the provider slot once at startup
///
/// Missing or invalid credentials do not stop the process. The slot is
/// marked misconfigured and every operation answers with an internal error.
pub fn build_provider(
    config: Result<ProviderConfig, ConfigError>,
) -> ProviderHandle<TwilioVerifyClient> {
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(
                reason = %e,
                event = "provider_config_missing",
                "Twilio is not configured; verification operations will fail"
            );
            return ProviderHandle::misconfigured(e.to_string());
        }
    };

    let handle = ProviderHandle::from_result(TwilioVerifyClient::new(config));
    if let ProviderHandle::Misconfigured(reason) = &handle {
        tracing::error!(
            reason = %reason,
            event = "provider_client_failed",
            "Failed to build Twilio client"
        );
    }
    handle
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_is_misconfigured() {
        let handle = build_provider(Err(ConfigError::Missing("TWILIO_ACCOUNT_SID")));
        assert!(!handle.is_ready());
        assert!(handle.get().is_err());
    }

    #[test]
    fn test_valid_config_is_ready() {
        let config = ProviderConfig::from_lookup(|key| match key {
            "TWILIO_ACCOUNT_SID" => Some("AC123".to_string()),
            "TWILIO_AUTH_TOKEN" => Some("secret".to_string()),
            "TWILIO_VERIFY_SERVICE_SID" => Some("VA123".to_string()),
            "TWILIO_FROM_NUMBER" => Some("+15550001111".to_string()),
            _ => None,
        });
        let handle = build_provider(config);
        assert!(handle.is_ready());
    }

    #[test]
    fn test_missing_sender_still_ready_for_verification() {
        use pv_core::VerificationProvider;

        let config = ProviderConfig::from_lookup(|key| match key {
            "TWILIO_ACCOUNT_SID" => Some("AC123".to_string()),
            "TWILIO_AUTH_TOKEN" => Some("secret".to_string()),
            "TWILIO_VERIFY_SERVICE_SID" => Some("VA123".to_string()),
            _ => None,
        });
        let handle = build_provider(config);
        assert!(handle.is_ready());
        assert!(handle.get().unwrap().check_sender().is_err());
    }
}
