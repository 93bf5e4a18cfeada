//! Access gate: verifies the inbound session token, renews it, and
//! forwards the request with the caller identity attached.
//!
//! Every call ends in exactly one of two ways: the downstream handler runs
//! and the response carries a fresh token in the `issued`, `expires` and
//! `token` headers, or the request is answered with 401 and nothing
//! downstream runs.

use axum::extract::{Request, State};
use axum::http::header::{HeaderMap, HeaderName, HeaderValue};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use tracing::{error, warn};

use paintstock_auth::jwt::IssuedToken;
use paintstock_core::error::AppError;
use paintstock_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Response header carrying the renewed token's issue time (ms since epoch).
pub const ISSUED_HEADER: HeaderName = HeaderName::from_static("issued");
/// Response header carrying the renewed token's expiry (ms since epoch).
pub const EXPIRES_HEADER: HeaderName = HeaderName::from_static("expires");
/// Response header carrying the renewed token.
pub const TOKEN_HEADER: HeaderName = HeaderName::from_static("token");

pub async fn access_gate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_owned();

    let Some(token) = read_token(request.headers(), &state.config.auth.auth_header) else {
        warn!(path = %path, "Rejected request without session token");
        return reject(AppError::invalid_token("Missing session token"));
    };

    let claims = match state.jwt_decoder.verify(&token) {
        Ok(claims) => claims,
        Err(e) => {
            warn!(
                path = %path,
                reason = %e.message,
                "Rejected request with invalid session token"
            );
            return reject(e);
        }
    };

    let renewed = match state.jwt_encoder.renew(&claims, Utc::now()) {
        Ok(renewed) => renewed,
        Err(e) => {
            error!(
                path = %path,
                user_id = claims.user_id,
                error = %e,
                "Session token renewal failed"
            );
            return reject(AppError::invalid_token("Session could not be renewed"));
        }
    };

    request
        .extensions_mut()
        .insert(RequestContext::new(claims.user_id));

    let mut response = next.run(request).await;
    attach_renewal(response.headers_mut(), &renewed);
    response
}

fn read_token(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
}

fn attach_renewal(headers: &mut HeaderMap, renewed: &IssuedToken) {
    headers.insert(ISSUED_HEADER, HeaderValue::from(renewed.issued_millis()));
    headers.insert(EXPIRES_HEADER, HeaderValue::from(renewed.expires_millis()));
    if let Ok(token) = HeaderValue::from_str(&renewed.token) {
        headers.insert(TOKEN_HEADER, token);
    }
}

fn reject(error: AppError) -> Response {
    ApiError::new(error, StatusCode::UNAUTHORIZED).into_response()
}
