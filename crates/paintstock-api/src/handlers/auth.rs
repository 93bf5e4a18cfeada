//! Auth handlers: register and login.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::request::CredentialsRequest;
use crate::dto::response::{LoginResponse, MessageResponse};
use crate::error::{ApiError, OrStatus};
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CredentialsRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let (username, password) = req.credentials();

    state
        .auth_service
        .register(username, password)
        .await
        .or_status(StatusCode::BAD_REQUEST)?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Account created")),
    ))
}

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CredentialsRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let (username, password) = req.credentials();

    let result = state
        .auth_service
        .login(username, password)
        .await
        .or_status(StatusCode::BAD_REQUEST)?;

    Ok(Json(LoginResponse::new(result.token, result.editor)))
}
