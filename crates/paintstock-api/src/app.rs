//! Application builder: wires repositories, auth primitives and services
//! into an [`AppState`], then router and middleware into an Axum app.

use std::sync::Arc;

use axum::Router;
use axum::middleware::from_fn;
use tower_http::trace::TraceLayer;

use paintstock_auth::jwt::{JwtDecoder, JwtEncoder};
use paintstock_auth::password::{PasswordHasher, PasswordValidator};
use paintstock_auth::rbac::RbacEnforcer;
use paintstock_core::config::AppConfig;
use paintstock_database::DatabasePool;
use paintstock_database::repositories::{PaintRepository, UserRepository};
use paintstock_service::{AuthService, PermissionService, StockService};

use crate::middleware::compression::build_compression_layer;
use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the shared application state from configuration and an open pool.
pub fn build_state(config: AppConfig, db: DatabasePool) -> AppState {
    // ── Repositories ─────────────────────────────────────────────
    let user_repo = Arc::new(UserRepository::new(db.pool().clone()));
    let paint_repo = Arc::new(PaintRepository::new(db.pool().clone()));

    // ── Auth ─────────────────────────────────────────────────────
    let hasher = Arc::new(PasswordHasher::new(&config.auth));
    let validator = Arc::new(PasswordValidator::new(&config.auth));
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
    let rbac = Arc::new(RbacEnforcer::new());

    // ── Services ─────────────────────────────────────────────────
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repo),
        hasher,
        validator,
        Arc::clone(&jwt_encoder),
    ));
    let permission_service = Arc::new(PermissionService::new(user_repo, rbac));
    let stock_service = Arc::new(StockService::new(
        paint_repo,
        Arc::clone(&permission_service),
    ));

    AppState {
        config: Arc::new(config),
        db,
        jwt_encoder,
        jwt_decoder,
        auth_service,
        permission_service,
        stock_service,
    }
}

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);

    build_router(state)
        .layer(from_fn(request_logging))
        .layer(build_compression_layer())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
