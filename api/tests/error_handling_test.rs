//! Tests for error envelopes and auxiliary routes

mod common;

use actix_web::test;
use serde_json::{json, Value};

use pv_api::app::create_app;
use pv_core::ProviderError;

use common::{bearer, caller_auth, MockProvider, TestContext};

#[actix_web::test]
async fn test_health_check() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), caller_auth())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_unknown_route_uses_error_envelope() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), caller_auth())).await;

    let req = test::TestRequest::get().uri("/api/v1/nope").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["status"], "NOT_FOUND");
}

#[actix_web::test]
async fn test_provider_error_message_is_carried() {
    let mut provider = MockProvider::new();
    provider.failure = Some(ProviderError::Api {
        http_status: 400,
        code: Some(60200),
        message: "Invalid parameter `To`: 12345".to_string(),
    });
    let ctx = TestContext::with_provider(provider);
    let app = test::init_service(create_app(ctx.state.clone(), caller_auth())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/sendVerificationCode")
        .insert_header(("Authorization", bearer("u1")))
        .set_json(json!({ "data": { "phoneNumber": "12345" } }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 500);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["status"], "INTERNAL");
    assert_eq!(body["error"]["message"], "Twilio Error: Invalid parameter `To`: 12345");
}

#[actix_web::test]
async fn test_malformed_json_is_treated_as_missing_arguments() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), caller_auth())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/checkVerificationCode")
        .insert_header(("Authorization", bearer("u1")))
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["status"], "INVALID_ARGUMENT");
}
