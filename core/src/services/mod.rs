//! Business services containing the verification use cases.

pub mod verification;

// Re-export commonly used types
pub use verification::{
    PhoneVerificationConfig, PhoneVerificationService, ProviderHandle, VerificationProvider,
};
