//! Shared fixtures for API integration tests

#![allow(dead_code)]

use actix_web::web;
use async_trait::async_trait;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use std::sync::{Arc, Mutex};

use pv_api::middleware::CallerAuth;
use pv_api::routes::verification::AppState;
use pv_core::{
    CallerIdentity, InMemoryProfileRepository, PhoneVerificationConfig,
    PhoneVerificationService, ProviderError, ProviderHandle, UserProfile, VerificationChannel,
    VerificationOutcome, VerificationProvider, VerificationStatus,
};
use pv_shared::config::JwtConfig;

pub const JWT_SECRET: &str = "test-secret-key-for-integration-tests";

/// Provider double recording every outbound call
pub struct MockProvider {
    pub calls: Arc<Mutex<Vec<String>>>,
    pub check_status: String,
    pub failure: Option<ProviderError>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            check_status: "approved".to_string(),
            failure: None,
        }
    }

    fn record(&self, call: String) -> Result<(), ProviderError> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl VerificationProvider for MockProvider {
    async fn start_verification(
        &self,
        phone: &str,
        channel: VerificationChannel,
    ) -> Result<VerificationOutcome, ProviderError> {
        self.record(format!("start {} {}", phone, channel))?;
        Ok(VerificationOutcome::new(VerificationStatus::Pending))
    }

    async fn check_verification(
        &self,
        phone: &str,
        code: &str,
    ) -> Result<VerificationOutcome, ProviderError> {
        self.record(format!("check {} {}", phone, code))?;
        Ok(VerificationOutcome::new(VerificationStatus::from_provider(
            &self.check_status,
        )))
    }

    async fn send_message(&self, to: &str, body: &str) -> Result<String, ProviderError> {
        self.record(format!("message {} {}", to, body))?;
        Ok("SM-test".to_string())
    }

    fn provider_name(&self) -> &str {
        "mock"
    }
}

pub type TestState = AppState<MockProvider, InMemoryProfileRepository>;

/// Everything a test needs to drive and inspect the app
pub struct TestContext {
    pub state: web::Data<TestState>,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub profiles: InMemoryProfileRepository,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_provider(MockProvider::new())
    }

    pub fn with_provider(provider: MockProvider) -> Self {
        let calls = provider.calls.clone();
        Self::build(ProviderHandle::ready(provider), calls)
    }

    pub fn misconfigured() -> Self {
        Self::build(
            ProviderHandle::misconfigured("TWILIO_ACCOUNT_SID not set"),
            Arc::new(Mutex::new(Vec::new())),
        )
    }

    fn build(provider: ProviderHandle<MockProvider>, calls: Arc<Mutex<Vec<String>>>) -> Self {
        let profiles = InMemoryProfileRepository::new();
        let service = PhoneVerificationService::new(
            provider,
            Arc::new(profiles.clone()),
            PhoneVerificationConfig::default().with_test_notification_body("test body"),
        );
        Self {
            state: web::Data::new(AppState::new(service)),
            calls,
            profiles,
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub async fn seed_profile(&self, uid: &str, phone: Option<&str>, verified: bool) {
        let mut profile = UserProfile::new(CallerIdentity::new(uid).unwrap());
        profile.phone = phone.map(str::to_string);
        profile.is_phone_verified = verified;
        self.profiles.insert(profile).await;
    }
}

pub fn caller_auth() -> CallerAuth {
    CallerAuth::new(&JwtConfig::new(JWT_SECRET))
}

/// Mint a valid bearer header value for `uid`
pub fn bearer(uid: &str) -> String {
    format!("Bearer {}", token_for(uid, JWT_SECRET))
}

pub fn token_for(uid: &str, secret: &str) -> String {
    let exp = chrono::Utc::now().timestamp() + 3600;
    encode(
        &Header::new(Algorithm::HS256),
        &serde_json::json!({ "sub": uid, "exp": exp }),
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}
