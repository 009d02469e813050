//! Main phone verification service implementation

use std::sync::Arc;

use pv_shared::utils::phone::mask_phone_number;

use crate::domain::value_objects::{
    CallerIdentity, ConfirmVerificationResult, RequestVerificationResult, TestNotificationResult,
    VerificationChannel,
};
use crate::errors::{DomainError, DomainResult, ProviderError, StoreError};
use crate::repositories::ProfileRepository;

use super::config::PhoneVerificationConfig;
use super::provider::{ProviderHandle, VerificationProvider};

/// Orchestrates phone verification between the caller, the provider and the
/// profile store
///
/// Stateless between calls. Preconditions are checked in a fixed order
/// (caller, arguments, provider configuration) and every one of them fails
/// before any network or store traffic happens.
pub struct PhoneVerificationService<P: VerificationProvider, R: ProfileRepository> {
    /// Provider client, or the reason it could not be built
    provider: ProviderHandle<P>,
    /// Profile store
    profiles: Arc<R>,
    /// Service configuration
    config: PhoneVerificationConfig,
}

impl<P: VerificationProvider, R: ProfileRepository> PhoneVerificationService<P, R> {
    /// Create a new phone verification service
    ///
    /// # Arguments
    ///
    /// * `provider` - Provider client built once at startup
    /// * `profiles` - Profile store implementation
    /// * `config` - Service configuration
    pub fn new(
        provider: ProviderHandle<P>,
        profiles: Arc<R>,
        config: PhoneVerificationConfig,
    ) -> Self {
        Self {
            provider,
            profiles,
            config,
        }
    }

    /// Ask the provider to send a one-time code to `phone_number`
    ///
    /// # Returns
    ///
    /// * `Ok(RequestVerificationResult)` - `success: true` with the provider status verbatim
    /// * `Err(DomainError::Unauthenticated)` - No caller identity
    /// * `Err(DomainError::InvalidArgument)` - Missing or blank phone number
    /// * `Err(DomainError::Internal)` - Provider missing or the provider call failed
    pub async fn request_verification(
        &self,
        caller: Option<&CallerIdentity>,
        phone_number: Option<&str>,
    ) -> DomainResult<RequestVerificationResult> {
        let caller = require_caller(caller, "You must be logged in to verify your phone.")?;
        let phone = require_present(phone_number).ok_or_else(|| {
            DomainError::invalid_argument(
                "The function must be called with a 'phoneNumber' argument.",
            )
        })?;
        let provider = self.provider.get()?;

        let outcome = provider
            .start_verification(phone, VerificationChannel::Sms)
            .await
            .map_err(|e| provider_failure("request_verification", caller, phone, e))?;

        tracing::info!(
            uid = %caller,
            phone = %mask_phone_number(phone),
            status = %outcome.status,
            sid = outcome.sid.as_deref().unwrap_or("-"),
            provider = provider.provider_name(),
            event = "verification_requested",
            "Sent verification code"
        );

        Ok(RequestVerificationResult {
            success: true,
            status: outcome.status,
        })
    }

    /// Check `code` with the provider and record the phone as verified on approval
    ///
    /// Exactly one conditional profile write happens, and only when the
    /// provider reports `approved`. Any other status is echoed back with
    /// `success: false` and nothing is written.
    ///
    /// # Returns
    ///
    /// * `Ok(ConfirmVerificationResult)` - Provider answered; `success` reflects approval
    /// * `Err(DomainError::Unauthenticated)` - No caller identity
    /// * `Err(DomainError::InvalidArgument)` - Missing phone number or code
    /// * `Err(DomainError::Internal)` - Provider or store failure
    pub async fn confirm_verification(
        &self,
        caller: Option<&CallerIdentity>,
        phone_number: Option<&str>,
        code: Option<&str>,
    ) -> DomainResult<ConfirmVerificationResult> {
        let caller = require_caller(caller, "You must be logged in to verify your phone.")?;
        let (phone, code) = match (require_present(phone_number), require_present(code)) {
            (Some(phone), Some(code)) => (phone, code),
            _ => {
                return Err(DomainError::invalid_argument(
                    "Missing 'phoneNumber' or 'code' arguments.",
                ))
            }
        };
        let provider = self.provider.get()?;

        let outcome = provider
            .check_verification(phone, code)
            .await
            .map_err(|e| provider_failure("confirm_verification", caller, phone, e))?;

        if !outcome.status.is_approved() {
            tracing::warn!(
                uid = %caller,
                phone = %mask_phone_number(phone),
                status = %outcome.status,
                event = "verification_not_approved",
                "Code check failed"
            );
            return Ok(ConfirmVerificationResult {
                success: false,
                status: outcome.status,
            });
        }

        tracing::info!(
            uid = %caller,
            phone = %mask_phone_number(phone),
            sid = outcome.sid.as_deref().unwrap_or("-"),
            event = "verification_approved",
            "Code approved, recording verified phone"
        );

        self.record_verified_phone(caller, phone).await?;

        Ok(ConfirmVerificationResult {
            success: true,
            status: outcome.status,
        })
    }

    /// Send the fixed test notification to the caller's verified phone
    ///
    /// Only a phone previously confirmed through `confirm_verification` can
    /// receive it, so the endpoint cannot relay SMS to arbitrary numbers.
    ///
    /// # Returns
    ///
    /// * `Ok(TestNotificationResult)` - Message accepted by the provider
    /// * `Err(DomainError::Unauthenticated)` - No caller identity
    /// * `Err(DomainError::NotFound)` - No profile for the caller
    /// * `Err(DomainError::FailedPrecondition)` - Phone absent or not verified
    /// * `Err(DomainError::Internal)` - Provider or store failure
    pub async fn send_test_notification(
        &self,
        caller: Option<&CallerIdentity>,
    ) -> DomainResult<TestNotificationResult> {
        let caller = require_caller(caller, "You must be logged in to send a test notification.")?;
        let provider = self.provider.get()?;
        provider.check_sender().map_err(sender_missing)?;

        let profile = self
            .profiles
            .find_by_uid(caller)
            .await
            .map_err(|e| store_failure("send_test_notification", caller, e))?
            .ok_or_else(|| DomainError::not_found("User profile not found."))?;

        let phone = profile.verified_phone().ok_or_else(|| {
            DomainError::failed_precondition(
                "Phone number is not verified. Verify your phone before sending notifications.",
            )
        })?;

        let message_id = provider
            .send_message(phone, &self.config.test_notification_body)
            .await
            .map_err(|e| provider_failure("send_test_notification", caller, phone, e))?;

        tracing::info!(
            uid = %caller,
            phone = %mask_phone_number(phone),
            message_id = %message_id,
            event = "test_notification_sent",
            "Sent test notification"
        );

        Ok(TestNotificationResult {
            success: true,
            message: self.config.test_notification_reply.clone(),
        })
    }

    /// Conditional write of the verified phone
    ///
    /// A lost race is resolved by re-reading once: if the winning write
    /// already recorded this phone as verified the outcome is the same and
    /// the confirmation stands. The provider check is never repeated.
    async fn record_verified_phone(&self, caller: &CallerIdentity, phone: &str) -> DomainResult<()> {
        let profile = self
            .profiles
            .find_by_uid(caller)
            .await
            .map_err(|e| store_failure("confirm_verification", caller, e))?
            .ok_or_else(|| {
                store_failure(
                    "confirm_verification",
                    caller,
                    StoreError::NotFound { uid: caller.to_string() },
                )
            })?;

        match self
            .profiles
            .mark_phone_verified(caller, phone, profile.version)
            .await
        {
            Ok(version) => {
                tracing::debug!(uid = %caller, version, "Profile updated");
                Ok(())
            }
            Err(StoreError::Conflict { .. }) => {
                let current = self
                    .profiles
                    .find_by_uid(caller)
                    .await
                    .map_err(|e| store_failure("confirm_verification", caller, e))?;

                match current {
                    Some(current) if current.verified_phone() == Some(phone) => {
                        tracing::info!(
                            uid = %caller,
                            phone = %mask_phone_number(phone),
                            event = "verification_already_recorded",
                            "Concurrent confirmation already recorded this phone"
                        );
                        Ok(())
                    }
                    _ => Err(store_failure(
                        "confirm_verification",
                        caller,
                        StoreError::Conflict { uid: caller.to_string() },
                    )),
                }
            }
            Err(e) => Err(store_failure("confirm_verification", caller, e)),
        }
    }
}

fn require_caller<'a>(
    caller: Option<&'a CallerIdentity>,
    message: &str,
) -> DomainResult<&'a CallerIdentity> {
    caller.ok_or_else(|| DomainError::unauthenticated(message))
}

fn require_present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn provider_failure(
    operation: &str,
    caller: &CallerIdentity,
    phone: &str,
    error: ProviderError,
) -> DomainError {
    tracing::error!(
        operation,
        uid = %caller,
        phone = %mask_phone_number(phone),
        error = %error,
        event = "provider_call_failed",
        "Verification provider call failed"
    );
    DomainError::internal(format!("Twilio Error: {}", error))
}

fn sender_missing(error: ProviderError) -> DomainError {
    tracing::error!(
        reason = %error,
        event = "provider_sender_missing",
        "Twilio sender is not configured. Check TWILIO_FROM_NUMBER."
    );
    DomainError::internal("Twilio config is missing.")
}

fn store_failure(operation: &str, caller: &CallerIdentity, error: StoreError) -> DomainError {
    tracing::error!(
        operation,
        uid = %caller,
        error = %error,
        event = "profile_store_failed",
        "Profile store operation failed"
    );
    DomainError::internal(format!("Profile store error: {}", error))
}
