//! Seam to the external verification provider

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use crate::domain::value_objects::{VerificationChannel, VerificationOutcome};
use crate::errors::{DomainError, DomainResult, ProviderError};

/// Trait for the verification and messaging provider
///
/// The provider is the only source of truth for code generation, delivery,
/// validity and expiry. Implementations make exactly one outbound request
/// per call and never retry.
#[async_trait]
pub trait VerificationProvider: Send + Sync {
    /// Ask the provider to send a one-time code to `phone`
    async fn start_verification(
        &self,
        phone: &str,
        channel: VerificationChannel,
    ) -> Result<VerificationOutcome, ProviderError>;

    /// Ask the provider whether `code` is valid for `phone`
    async fn check_verification(
        &self,
        phone: &str,
        code: &str,
    ) -> Result<VerificationOutcome, ProviderError>;

    /// Send `body` to `to` from the configured sender; returns the message id
    async fn send_message(&self, to: &str, body: &str) -> Result<String, ProviderError>;

    /// Whether outbound messages can be sent, checked without network traffic
    ///
    /// Verification calls do not need a sender, so a provider can be ready
    /// for them while this still fails.
    fn check_sender(&self) -> Result<(), ProviderError> {
        Ok(())
    }

    /// Provider name used in logs
    fn provider_name(&self) -> &str;
}

/// A provider client built once at startup, or the reason it could not be
///
/// Construction failure is kept as a value so the server still starts and
/// each operation can answer with an internal error before touching the
/// network.
pub enum ProviderHandle<P> {
    Ready(Arc<P>),
    Misconfigured(String),
}

impl<P> ProviderHandle<P> {
    pub fn ready(provider: P) -> Self {
        Self::Ready(Arc::new(provider))
    }

    pub fn misconfigured(reason: impl Into<String>) -> Self {
        Self::Misconfigured(reason.into())
    }

    /// Build from a fallible constructor result
    pub fn from_result<E: fmt::Display>(result: Result<P, E>) -> Self {
        match result {
            Ok(provider) => Self::ready(provider),
            Err(e) => Self::misconfigured(e.to_string()),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Borrow the provider, or fail with the caller-facing internal error
    pub fn get(&self) -> DomainResult<&P> {
        match self {
            Self::Ready(provider) => Ok(provider.as_ref()),
            Self::Misconfigured(reason) => {
                tracing::error!(
                    reason = %reason,
                    event = "provider_misconfigured",
                    "Twilio config is missing. Check environment and deployment."
                );
                Err(DomainError::internal("Twilio config is missing."))
            }
        }
    }
}

impl<P> Clone for ProviderHandle<P> {
    fn clone(&self) -> Self {
        match self {
            Self::Ready(provider) => Self::Ready(Arc::clone(provider)),
            Self::Misconfigured(reason) => Self::Misconfigured(reason.clone()),
        }
    }
}

impl<P> fmt::Debug for ProviderHandle<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready(_) => f.write_str("ProviderHandle::Ready"),
            Self::Misconfigured(reason) => write!(f, "ProviderHandle::Misconfigured({})", reason),
        }
    }
}
