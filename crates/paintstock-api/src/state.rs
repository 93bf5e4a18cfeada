//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use paintstock_auth::jwt::{JwtDecoder, JwtEncoder};
use paintstock_core::config::AppConfig;
use paintstock_database::DatabasePool;
use paintstock_service::{AuthService, PermissionService, StockService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped or pool handles, so cloning is cheap.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// SQLite connection pool
    pub db: DatabasePool,

    // ── Auth ─────────────────────────────────────────────────
    /// Signs and renews session tokens
    pub jwt_encoder: Arc<JwtEncoder>,
    /// Verifies session tokens
    pub jwt_decoder: Arc<JwtDecoder>,

    // ── Services ─────────────────────────────────────────────
    pub auth_service: Arc<AuthService>,
    pub permission_service: Arc<PermissionService>,
    pub stock_service: Arc<StockService>,
}
