//! Domain layer containing entities and value objects.

pub mod entities;
pub mod value_objects;

// Re-export commonly used domain types
pub use entities::UserProfile;
pub use value_objects::{
    CallerIdentity, ConfirmVerificationResult, RequestVerificationResult, TestNotificationResult,
    VerificationChannel, VerificationOutcome, VerificationStatus,
};
