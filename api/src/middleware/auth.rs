//! Caller authentication middleware for the callable endpoints.
//!
//! Extracts a Bearer JWT from the Authorization header, verifies it with
//! HS256 and injects the `sub` claim into the request as the caller
//! identity. A missing or invalid token never rejects the request here: the
//! handler sees no caller and the verification service answers
//! `UNAUTHENTICATED` in the callable error shape.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use pv_core::CallerIdentity;
use pv_shared::config::JwtConfig;

/// Claims read from the caller token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Caller identity
    pub sub: String,
    /// Expiry as a unix timestamp
    pub exp: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<usize>,
}

/// Verifies caller tokens against the configured secret
pub struct CallerVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl CallerVerifier {
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = config.leeway_secs;
        if let Some(issuer) = &config.issuer {
            validation.set_issuer(&[issuer.as_str()]);
        }
        match &config.audience {
            Some(audience) => validation.set_audience(&[audience.as_str()]),
            None => validation.validate_aud = false,
        }

        Self {
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
        }
    }

    /// Resolve a raw token to a caller identity
    pub fn verify(&self, token: &str) -> Result<CallerIdentity, String> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| format!("Token decode error: {}", e))?;

        CallerIdentity::new(data.claims.sub).ok_or_else(|| "Token has a blank subject".to_string())
    }
}

/// Caller authentication middleware factory
#[derive(Clone)]
pub struct CallerAuth {
    verifier: Arc<CallerVerifier>,
}

impl CallerAuth {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            verifier: Arc::new(CallerVerifier::new(config)),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for CallerAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = CallerAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CallerAuthMiddleware {
            service: Rc::new(service),
            verifier: Arc::clone(&self.verifier),
        }))
    }
}

/// Caller authentication middleware service
pub struct CallerAuthMiddleware<S> {
    service: Rc<S>,
    verifier: Arc<CallerVerifier>,
}

impl<S, B> Service<ServiceRequest> for CallerAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        if let Some(token) = extract_bearer_token(&req) {
            match self.verifier.verify(&token) {
                Ok(caller) => {
                    req.extensions_mut().insert(caller);
                }
                Err(reason) => {
                    tracing::debug!(reason = %reason, path = %req.path(), "Rejected caller token");
                }
            }
        }

        Box::pin(async move { service.call(req).await })
    }
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Extractor for the optional caller identity
///
/// Never fails; an anonymous request yields `Caller(None)`.
#[derive(Debug, Clone)]
pub struct Caller(pub Option<CallerIdentity>);

impl Caller {
    pub fn identity(&self) -> Option<&CallerIdentity> {
        self.0.as_ref()
    }
}

impl FromRequest for Caller {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        ready(Ok(Caller(req.extensions().get::<CallerIdentity>().cloned())))
    }
}
