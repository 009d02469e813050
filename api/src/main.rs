use actix_web::{web, HttpServer};
use std::sync::Arc;

use pv_api::{
    app::create_app, middleware::CallerAuth, routes::verification::AppState, telemetry,
};
use pv_core::{PhoneVerificationConfig, PhoneVerificationService};
use pv_infra::{build_provider, DatabasePool, MySqlProfileRepository};
use pv_shared::config::{provider::DEFAULT_TEST_NOTIFICATION_BODY, AppConfig, Environment};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Environment-specific file first, then the generic .env
    dotenvy::from_filename(Environment::from_env().env_file()).ok();
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    telemetry::init(&config.logging)?;

    tracing::info!(environment = %config.environment, "Starting phone verify API server");

    let db_pool = DatabasePool::new(&config.database).await?;
    db_pool.run_migrations().await?;
    tracing::info!(pool = %db_pool.get_statistics(), "Profile store ready");
    let profiles = Arc::new(MySqlProfileRepository::new(db_pool.get_pool().clone()));

    let test_notification_body = config
        .provider
        .as_ref()
        .map(|p| p.test_notification_body.clone())
        .unwrap_or_else(|_| DEFAULT_TEST_NOTIFICATION_BODY.to_string());
    if config.environment.is_production() && config.provider.is_err() {
        tracing::error!("Running in production without Twilio credentials");
    }
    let provider = build_provider(config.provider.clone());

    let service = PhoneVerificationService::new(
        provider,
        profiles,
        PhoneVerificationConfig::default().with_test_notification_body(test_notification_body),
    );
    let app_state = web::Data::new(AppState::new(service));
    let caller_auth = CallerAuth::new(&config.jwt);

    let bind_address = config.server.bind_address();
    tracing::info!(address = %bind_address, "Server will bind");

    let mut server = HttpServer::new(move || create_app(app_state.clone(), caller_auth.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }
    server.bind(&bind_address)?.run().await?;

    db_pool.close().await;
    Ok(())
}
