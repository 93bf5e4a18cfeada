//! Paint stock repository implementation.

use sqlx::SqlitePool;

use paintstock_core::error::{AppError, ErrorKind};
use paintstock_core::result::AppResult;
use paintstock_entity::paint::{CreatePaint, Paint};

/// Repository for the `paintstock` table.
#[derive(Debug, Clone)]
pub struct PaintRepository {
    pool: SqlitePool,
}

impl PaintRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List every colour in catalogue order.
    pub async fn list(&self) -> AppResult<Vec<Paint>> {
        sqlx::query_as::<_, Paint>("SELECT color, stock, colorcode FROM paintstock ORDER BY rowid")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list paint stock", e)
            })
    }

    pub async fn find_by_color(&self, color: &str) -> AppResult<Option<Paint>> {
        sqlx::query_as::<_, Paint>(
            "SELECT color, stock, colorcode FROM paintstock WHERE color = ?",
        )
        .bind(color)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find paint", e))
    }

    /// Add a colour. An existing colour yields a conflict error.
    pub async fn create(&self, data: &CreatePaint) -> AppResult<Paint> {
        sqlx::query_as::<_, Paint>(
            "INSERT INTO paintstock (color, stock, colorcode) VALUES (?, ?, ?) \
             RETURNING color, stock, colorcode",
        )
        .bind(&data.color)
        .bind(data.stock)
        .bind(&data.colorcode)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::conflict(format!("Color '{}' already exists", data.color))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create paint", e),
        })
    }

    /// Set the stock level of a colour. Returns the stored level, or `None`
    /// when the colour is unknown.
    pub async fn set_stock(&self, color: &str, stock: i64) -> AppResult<Option<i64>> {
        sqlx::query_scalar::<_, i64>(
            "UPDATE paintstock SET stock = ? WHERE color = ? RETURNING stock",
        )
        .bind(stock)
        .bind(color)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update stock", e))
    }
}
