use actix_web::{web, HttpResponse};

use pv_core::{ProfileRepository, VerificationProvider};

use super::AppState;
use crate::dto::{CallableRequest, CallableResponse, SendVerificationCodeData};
use crate::handlers::ApiError;
use crate::middleware::Caller;

/// Handler for POST /api/v1/sendVerificationCode
///
/// # Request Body
///
/// ```json
/// { "data": { "phoneNumber": "+15551234567" } }
/// ```
///
/// # Response
///
/// ```json
/// { "result": { "success": true, "status": "pending" } }
/// ```
pub async fn send_verification_code<P, R>(
    state: web::Data<AppState<P, R>>,
    caller: Caller,
    body: Option<web::Json<CallableRequest<SendVerificationCodeData>>>,
) -> Result<HttpResponse, ApiError>
where
    P: VerificationProvider + 'static,
    R: ProfileRepository + 'static,
{
    let data = body.map(|b| b.into_inner().data).unwrap_or_default();

    let result = state
        .verification_service
        .request_verification(caller.identity(), data.phone_number.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(CallableResponse::new(result)))
}
