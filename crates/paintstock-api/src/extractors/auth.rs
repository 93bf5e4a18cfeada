//! `AuthUser` extractor: the caller identity placed by the access gate.

use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::http::request::Parts;

use paintstock_core::error::AppError;
use paintstock_service::context::RequestContext;

use crate::error::ApiError;

/// Authenticated caller available in gated handlers.
///
/// Only routes behind [`access_gate`](crate::middleware::gate::access_gate)
/// carry a context; elsewhere extraction fails with 401.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<RequestContext>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                ApiError::new(
                    AppError::invalid_token("Missing session token"),
                    StatusCode::UNAUTHORIZED,
                )
            })
    }
}
