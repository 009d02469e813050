//! Twilio Verify client implementation
//!
//! One outbound request per operation. There is no retry loop: a repeated
//! start would send the user a second code, and a repeated check counts
//! against the verification's attempt limit.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info, warn};

use pv_core::{
    ProviderError, VerificationChannel, VerificationOutcome, VerificationProvider,
    VerificationStatus,
};
use pv_shared::config::ProviderConfig;
use pv_shared::utils::phone::mask_phone_number;

use super::types::{TwilioErrorBody, TwilioMessage, TwilioVerification};
use crate::InfrastructureError;

/// Twilio Verify and Messaging client
pub struct TwilioVerifyClient {
    http: reqwest::Client,
    config: ProviderConfig,
}

impl TwilioVerifyClient {
    /// Create a new client
    ///
    /// The request timeout from the configuration bounds every call.
    pub fn new(config: ProviderConfig) -> Result<Self, InfrastructureError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!(
            service_sid = %config.verify_service_sid,
            timeout_secs = config.request_timeout_secs,
            "Twilio client initialized"
        );
        match config.sender() {
            Ok(from) => debug!(from = %mask_phone_number(from), "Twilio sender configured"),
            Err(e) => warn!(reason = %e, "Twilio sender unavailable; test notifications will fail"),
        }

        Ok(Self { http, config })
    }

    fn sender(&self) -> Result<&str, ProviderError> {
        self.config
            .sender()
            .map_err(|e| ProviderError::Config(e.to_string()))
    }

    fn verifications_url(&self) -> String {
        format!(
            "{}/v2/Services/{}/Verifications",
            self.config.verify_base_url.trim_end_matches('/'),
            self.config.verify_service_sid
        )
    }

    fn verification_check_url(&self) -> String {
        format!(
            "{}/v2/Services/{}/VerificationCheck",
            self.config.verify_base_url.trim_end_matches('/'),
            self.config.verify_service_sid
        )
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.config.api_base_url.trim_end_matches('/'),
            self.config.account_sid
        )
    }

    /// POST a form with basic auth and decode the JSON reply
    async fn post_form<T: DeserializeOwned>(
        &self,
        url: &str,
        form: &[(&str, &str)],
    ) -> Result<T, ProviderError> {
        let response = self
            .http
            .post(url)
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(form)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        if !status.is_success() {
            let error = api_error(status.as_u16(), &body);
            warn!(http_status = status.as_u16(), error = %error, "Twilio rejected request");
            return Err(error);
        }

        serde_json::from_str(&body).map_err(|e| ProviderError::Decode(e.to_string()))
    }
}

/// Map a non-2xx Twilio reply to a provider error
fn api_error(http_status: u16, body: &str) -> ProviderError {
    match serde_json::from_str::<TwilioErrorBody>(body) {
        Ok(parsed) => ProviderError::Api {
            http_status,
            code: parsed.code,
            message: parsed
                .message
                .unwrap_or_else(|| format!("HTTP {}", http_status)),
        },
        Err(_) => ProviderError::Api {
            http_status,
            code: None,
            message: format!("HTTP {}", http_status),
        },
    }
}

fn outcome(resource: TwilioVerification) -> VerificationOutcome {
    let outcome = VerificationOutcome::new(VerificationStatus::from_provider(&resource.status));
    match resource.sid {
        Some(sid) => outcome.with_sid(sid),
        None => outcome,
    }
}

#[async_trait]
impl VerificationProvider for TwilioVerifyClient {
    async fn start_verification(
        &self,
        phone: &str,
        channel: VerificationChannel,
    ) -> Result<VerificationOutcome, ProviderError> {
        debug!(phone = %mask_phone_number(phone), channel = %channel, "Starting Twilio verification");

        let resource: TwilioVerification = self
            .post_form(
                &self.verifications_url(),
                &[("To", phone), ("Channel", channel.as_str())],
            )
            .await?;

        Ok(outcome(resource))
    }

    async fn check_verification(
        &self,
        phone: &str,
        code: &str,
    ) -> Result<VerificationOutcome, ProviderError> {
        debug!(phone = %mask_phone_number(phone), "Checking Twilio verification");

        let resource: TwilioVerification = self
            .post_form(&self.verification_check_url(), &[("To", phone), ("Code", code)])
            .await?;

        Ok(outcome(resource))
    }

    async fn send_message(&self, to: &str, body: &str) -> Result<String, ProviderError> {
        debug!(
            to = %mask_phone_number(to),
            length = body.len(),
            "Sending Twilio message"
        );

        let from = self.sender()?;
        let message: TwilioMessage = self
            .post_form(&self.messages_url(), &[("To", to), ("From", from), ("Body", body)])
            .await?;

        Ok(message.sid)
    }

    fn check_sender(&self) -> Result<(), ProviderError> {
        self.sender().map(|_| ())
    }

    fn provider_name(&self) -> &str {
        "Twilio"
    }
}
