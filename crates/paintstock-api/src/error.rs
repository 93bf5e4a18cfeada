//! Maps domain `AppError` to HTTP responses.
//!
//! Expected failures map to a fixed status by kind. Unexpected failures
//! (store, signing, configuration) never surface as 5xx: each endpoint names
//! the status they collapse into, and their detail only goes to the log.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use paintstock_core::error::{AppError, ErrorKind};

const GENERIC_MESSAGE: &str = "The request could not be completed";

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// An [`AppError`] paired with the status used when its kind is an
/// unexpected failure.
#[derive(Debug)]
pub struct ApiError {
    error: AppError,
    fallback: StatusCode,
}

impl ApiError {
    pub fn new(error: AppError, fallback: StatusCode) -> Self {
        Self { error, fallback }
    }

    /// The HTTP status this error will be rendered with.
    pub fn status(&self) -> StatusCode {
        match self.error.kind {
            ErrorKind::Validation | ErrorKind::Hashing => StatusCode::BAD_REQUEST,
            ErrorKind::Authentication | ErrorKind::InvalidToken => StatusCode::UNAUTHORIZED,
            ErrorKind::Authorization => StatusCode::FORBIDDEN,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::Signing
            | ErrorKind::Database
            | ErrorKind::Configuration
            | ErrorKind::Serialization
            | ErrorKind::Io
            | ErrorKind::Internal => self.fallback,
        }
    }

    fn code(&self) -> &'static str {
        match self.error.kind {
            ErrorKind::Validation => "VALIDATION_ERROR",
            ErrorKind::Hashing => "HASHING_ERROR",
            ErrorKind::Authentication => "AUTHENTICATION_ERROR",
            ErrorKind::InvalidToken => "INVALID_TOKEN",
            ErrorKind::Authorization => "AUTHORIZATION_ERROR",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::Conflict => "CONFLICT",
            _ => "REQUEST_FAILED",
        }
    }
}

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        Self::new(error, StatusCode::BAD_REQUEST)
    }
}

/// Attaches the endpoint's fallback status to a service result.
pub trait OrStatus<T> {
    fn or_status(self, fallback: StatusCode) -> Result<T, ApiError>;
}

impl<T> OrStatus<T> for Result<T, AppError> {
    fn or_status(self, fallback: StatusCode) -> Result<T, ApiError> {
        self.map_err(|e| ApiError::new(e, fallback))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        let message = if self.error.kind.is_internal() || self.error.kind == ErrorKind::Hashing {
            tracing::error!(
                kind = %self.error.kind,
                error = %self.error.message,
                source = ?self.error.source,
                status = status.as_u16(),
                "Request failed"
            );
            GENERIC_MESSAGE.to_string()
        } else {
            self.error.message
        };

        let body = ApiErrorResponse {
            error: code.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}
