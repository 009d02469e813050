//! Application factory
//!
//! Builds the actix-web application around a verification service and the
//! caller authentication middleware.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use pv_core::{ProfileRepository, VerificationProvider};
use pv_shared::errors::{error_codes, ErrorResponse};

use crate::middleware::CallerAuth;
use crate::routes::verification::{
    check_verification_code, send_test_notification, send_verification_code, AppState,
};

/// Create and configure the application with all dependencies
pub fn create_app<P, R>(
    app_state: web::Data<AppState<P, R>>,
    caller_auth: CallerAuth,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    P: VerificationProvider + 'static,
    R: ProfileRepository + 'static,
{
    App::new()
        .app_data(app_state)
        // Outermost first: request span, then caller resolution
        .wrap(caller_auth)
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .route(
                    "/sendVerificationCode",
                    web::post().to(send_verification_code::<P, R>),
                )
                .route(
                    "/checkVerificationCode",
                    web::post().to(check_verification_code::<P, R>),
                )
                .route(
                    "/sendTestNotification",
                    web::post().to(send_test_notification::<P, R>),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "phone-verify-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
