//! Mapping of domain errors to callable HTTP error responses

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

use pv_core::DomainError;
use pv_shared::errors::ErrorResponse;

/// Domain error carried out of a handler
///
/// Renders as `{"error": {"status", "message"}}` with the canonical status
/// string and an HTTP code per error kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self(error)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.0 {
            DomainError::Unauthenticated { .. } => StatusCode::UNAUTHORIZED,
            DomainError::InvalidArgument { .. } => StatusCode::BAD_REQUEST,
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::FailedPrecondition { .. } => StatusCode::BAD_REQUEST,
            DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(ErrorResponse::new(self.0.code(), self.0.message()))
    }
}
