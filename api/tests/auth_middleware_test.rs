//! Integration tests for the caller authentication middleware

mod common;

use actix_web::{test, web, App, HttpResponse};
use serde_json::{json, Value};

use pv_api::app::create_app;
use pv_api::middleware::Caller;

use common::{bearer, caller_auth, token_for, TestContext};

async fn whoami(caller: Caller) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "uid": caller.identity().map(|c| c.as_str().to_string())
    }))
}

#[actix_web::test]
async fn test_valid_token_resolves_caller() {
    let app = test::init_service(
        App::new()
            .wrap(caller_auth())
            .route("/whoami", web::get().to(whoami)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/whoami")
        .insert_header(("Authorization", bearer("u1")))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["uid"], "u1");
}

#[actix_web::test]
async fn test_missing_token_passes_through_without_caller() {
    let app = test::init_service(
        App::new()
            .wrap(caller_auth())
            .route("/whoami", web::get().to(whoami)),
    )
    .await;

    let req = test::TestRequest::get().uri("/whoami").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["uid"].is_null());
}

#[actix_web::test]
async fn test_invalid_token_passes_through_without_caller() {
    let app = test::init_service(
        App::new()
            .wrap(caller_auth())
            .route("/whoami", web::get().to(whoami)),
    )
    .await;

    for header in [
        "Bearer invalid-token".to_string(),
        format!("Bearer {}", token_for("u1", "wrong-secret")),
        "Basic dTE6cGFzcw==".to_string(),
    ] {
        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", header))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert!(body["uid"].is_null());
    }
}

#[actix_web::test]
async fn test_forged_token_is_unauthenticated_on_every_operation() {
    let ctx = TestContext::new();
    ctx.seed_profile("u1", Some("+15550000001"), true).await;
    let app = test::init_service(create_app(ctx.state.clone(), caller_auth())).await;
    let forged = format!("Bearer {}", token_for("u1", "wrong-secret"));

    for uri in [
        "/api/v1/sendVerificationCode",
        "/api/v1/checkVerificationCode",
        "/api/v1/sendTestNotification",
    ] {
        let req = test::TestRequest::post()
            .uri(uri)
            .insert_header(("Authorization", forged.clone()))
            .set_json(json!({ "data": { "phoneNumber": "+15550000001", "code": "123456" } }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401, "{}", uri);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["status"], "UNAUTHENTICATED");
    }

    assert!(ctx.calls().is_empty());
    assert_eq!(ctx.profiles.write_count(), 0);
}
