//! Phone verification route handlers
//!
//! - `sendVerificationCode`: start a verification for a phone number
//! - `checkVerificationCode`: confirm a code and record the verified phone
//! - `sendTestNotification`: send a test SMS to the verified phone

pub mod check_verification_code;
pub mod send_test_notification;
pub mod send_verification_code;

use std::sync::Arc;

use pv_core::{PhoneVerificationService, ProfileRepository, VerificationProvider};

pub use check_verification_code::check_verification_code;
pub use send_test_notification::send_test_notification;
pub use send_verification_code::send_verification_code;

/// Application state that holds shared services
pub struct AppState<P, R>
where
    P: VerificationProvider,
    R: ProfileRepository,
{
    pub verification_service: Arc<PhoneVerificationService<P, R>>,
}

impl<P, R> AppState<P, R>
where
    P: VerificationProvider,
    R: ProfileRepository,
{
    pub fn new(verification_service: PhoneVerificationService<P, R>) -> Self {
        Self {
            verification_service: Arc::new(verification_service),
        }
    }
}
