//! Value objects representing immutable domain concepts.

pub mod caller;
pub mod outcomes;
pub mod verification;

pub use caller::CallerIdentity;
pub use outcomes::{ConfirmVerificationResult, RequestVerificationResult, TestNotificationResult};
pub use verification::{VerificationChannel, VerificationOutcome, VerificationStatus};
