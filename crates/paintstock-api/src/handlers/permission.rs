//! Account administration handlers. All of them require the admin role.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use paintstock_entity::AccountSummary;

use crate::dto::request::{SetActivatedRequest, SetEditorRequest};
use crate::dto::response::{ActivatedResponse, EditorResponse};
use crate::error::{ApiError, OrStatus};
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// GET /permission/list
pub async fn list_accounts(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<AccountSummary>>, ApiError> {
    let accounts = state
        .permission_service
        .list_accounts(auth.context())
        .await
        .or_status(StatusCode::NOT_FOUND)?;

    Ok(Json(accounts))
}

/// POST /permission/activate
pub async fn set_activated(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<SetActivatedRequest>,
) -> Result<(StatusCode, Json<ActivatedResponse>), ApiError> {
    let target = req.user_id.unwrap_or_default();
    let activated = req.activated.unwrap_or_default();

    let activated = state
        .permission_service
        .set_activated(auth.context(), target, activated)
        .await
        .or_status(StatusCode::NOT_FOUND)?;

    Ok((StatusCode::CREATED, Json(ActivatedResponse { activated })))
}

/// POST /permission/editor
pub async fn set_editor(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<SetEditorRequest>,
) -> Result<(StatusCode, Json<EditorResponse>), ApiError> {
    let target = req.user_id.unwrap_or_default();
    let editor = req.editor.unwrap_or_default();

    let editor = state
        .permission_service
        .set_editor(auth.context(), target, editor)
        .await
        .or_status(StatusCode::NOT_FOUND)?;

    Ok((StatusCode::CREATED, Json(EditorResponse { editor })))
}
