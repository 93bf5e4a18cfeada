//! Paint stock reads and editor-gated adjustments.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use paintstock_auth::rbac::Action;
use paintstock_core::error::AppError;
use paintstock_database::repositories::PaintRepository;
use paintstock_entity::account::Permissions;
use paintstock_entity::paint::{CreatePaint, Paint};

use crate::context::RequestContext;
use crate::permission::PermissionService;

/// Stock table together with the caller's own role flags.
#[derive(Debug, Clone, Serialize)]
pub struct StockListing {
    pub permissions: Permissions,
    pub list: Vec<Paint>,
}

#[derive(Debug, Clone)]
pub struct StockService {
    paint_repo: Arc<PaintRepository>,
    permissions: Arc<PermissionService>,
}

impl StockService {
    pub fn new(paint_repo: Arc<PaintRepository>, permissions: Arc<PermissionService>) -> Self {
        Self {
            paint_repo,
            permissions,
        }
    }

    /// Lists all colours along with the caller's flags.
    pub async fn list(&self, ctx: &RequestContext) -> Result<StockListing, AppError> {
        let permissions = self.permissions.authorize(ctx, Action::ViewStock).await?;
        let list = self.paint_repo.list().await?;
        Ok(StockListing { permissions, list })
    }

    /// Sets the stock of `color` to `amount`. Requires the editor role.
    ///
    /// Returns the stored level; an unknown colour is a not-found error.
    pub async fn adjust(
        &self,
        ctx: &RequestContext,
        color: &str,
        amount: i64,
    ) -> Result<i64, AppError> {
        if color.trim().is_empty() {
            return Err(AppError::validation("A color is required"));
        }
        if amount < 0 {
            return Err(AppError::validation("Stock cannot be negative"));
        }

        self.permissions.authorize(ctx, Action::AdjustStock).await?;

        let stock = self
            .paint_repo
            .set_stock(color, amount)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Unknown color '{color}'")))?;

        info!(user_id = ctx.user_id, color = %color, stock, "Stock adjusted");
        Ok(stock)
    }

    /// Adds a colour to the catalogue.
    pub async fn add_paint(&self, paint: CreatePaint) -> Result<Paint, AppError> {
        if paint.color.trim().is_empty() || paint.colorcode.trim().is_empty() {
            return Err(AppError::validation("Color and color code are required"));
        }
        if paint.stock < 0 {
            return Err(AppError::validation("Stock cannot be negative"));
        }

        let created = self.paint_repo.create(&paint).await?;
        info!(color = %created.color, stock = created.stock, "Paint added");
        Ok(created)
    }

    /// Lists all colours without any caller context.
    pub async fn catalogue(&self) -> Result<Vec<Paint>, AppError> {
        self.paint_repo.list().await
    }
}
