//! Callable-function wire envelope
//!
//! Requests arrive as `{"data": {...}}` and successful replies leave as
//! `{"result": {...}}`. Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};

/// Incoming callable request
///
/// A missing `data` object deserializes to its default so that absent
/// arguments reach the service and are reported as invalid there.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallableRequest<T> {
    #[serde(default)]
    pub data: T,
}

/// Successful callable reply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallableResponse<T> {
    pub result: T,
}

impl<T> CallableResponse<T> {
    pub fn new(result: T) -> Self {
        Self { result }
    }
}

/// Arguments of `sendVerificationCode`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendVerificationCodeData {
    #[serde(default)]
    pub phone_number: Option<String>,
}

/// Arguments of `checkVerificationCode`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckVerificationCodeData {
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}
