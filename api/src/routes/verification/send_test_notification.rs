use actix_web::{web, HttpResponse};

use pv_core::{ProfileRepository, VerificationProvider};

use super::AppState;
use crate::dto::CallableResponse;
use crate::handlers::ApiError;
use crate::middleware::Caller;

/// Handler for POST /api/v1/sendTestNotification
///
/// Takes no arguments; any request body is ignored.
pub async fn send_test_notification<P, R>(
    state: web::Data<AppState<P, R>>,
    caller: Caller,
) -> Result<HttpResponse, ApiError>
where
    P: VerificationProvider + 'static,
    R: ProfileRepository + 'static,
{
    let result = state
        .verification_service
        .send_test_notification(caller.identity())
        .await?;

    Ok(HttpResponse::Ok().json(CallableResponse::new(result)))
}
