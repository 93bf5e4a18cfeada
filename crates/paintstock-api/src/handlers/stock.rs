//! Paint stock handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use paintstock_service::StockListing;

use crate::dto::request::AdjustStockRequest;
use crate::dto::response::StockResponse;
use crate::error::{ApiError, OrStatus};
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// GET /stock/list
pub async fn list_stock(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<StockListing>, ApiError> {
    let listing = state
        .stock_service
        .list(auth.context())
        .await
        .or_status(StatusCode::NOT_FOUND)?;

    Ok(Json(listing))
}

/// POST /stock/adjust
pub async fn adjust_stock(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<AdjustStockRequest>,
) -> Result<(StatusCode, Json<StockResponse>), ApiError> {
    let color = req.color.unwrap_or_default();
    let amount = req.amount.unwrap_or_default();

    let stock = state
        .stock_service
        .adjust(auth.context(), &color, amount)
        .await
        .or_status(StatusCode::NOT_FOUND)?;

    Ok((StatusCode::CREATED, Json(StockResponse { stock })))
}
