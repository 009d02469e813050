//! # Phone Verify Core
//!
//! Core domain layer for the phone verify backend. It contains the
//! verification orchestration service, the closed error taxonomy returned to
//! callers, and the seams to the two external collaborators: the
//! verification provider and the profile store.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::UserProfile;
pub use domain::value_objects::{
    CallerIdentity, ConfirmVerificationResult, RequestVerificationResult, TestNotificationResult,
    VerificationChannel, VerificationOutcome, VerificationStatus,
};
pub use errors::{DomainError, DomainResult, ProviderError, StoreError};
pub use repositories::{InMemoryProfileRepository, ProfileRepository};
pub use services::{
    PhoneVerificationConfig, PhoneVerificationService, ProviderHandle, VerificationProvider,
};
