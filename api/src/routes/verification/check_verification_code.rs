use actix_web::{web, HttpResponse};

use pv_core::{ProfileRepository, VerificationProvider};

use super::AppState;
use crate::dto::{CallableRequest, CallableResponse, CheckVerificationCodeData};
use crate::handlers::ApiError;
use crate::middleware::Caller;

/// Handler for POST /api/v1/checkVerificationCode
///
/// # Request Body
///
/// ```json
/// { "data": { "phoneNumber": "+15551234567", "code": "123456" } }
/// ```
///
/// # Response
///
/// `success` is true only when the provider approved the code.
///
/// ```json
/// { "result": { "success": true, "status": "approved" } }
/// ```
pub async fn check_verification_code<P, R>(
    state: web::Data<AppState<P, R>>,
    caller: Caller,
    body: Option<web::Json<CallableRequest<CheckVerificationCodeData>>>,
) -> Result<HttpResponse, ApiError>
where
    P: VerificationProvider + 'static,
    R: ProfileRepository + 'static,
{
    let data = body.map(|b| b.into_inner().data).unwrap_or_default();

    let result = state
        .verification_service
        .confirm_verification(
            caller.identity(),
            data.phone_number.as_deref(),
            data.code.as_deref(),
        )
        .await?;

    Ok(HttpResponse::Ok().json(CallableResponse::new(result)))
}
