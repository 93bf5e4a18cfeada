//! Route definitions for the Paintstock HTTP API.
//!
//! `/auth/*` and `/health` are public. `/stock/*` and `/permission/*` sit
//! behind the access gate, which verifies and renews the session token
//! before any handler runs.

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::middleware::gate::access_gate;
use crate::state::AppState;

/// Build the Axum router with all routes.
///
/// When `server.static_dir` is set, unmatched paths are served from that
/// directory.
pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .merge(auth_routes())
        .merge(stock_routes(&state))
        .merge(permission_routes(&state))
        .merge(health_routes());

    let router = match state.config.server.static_dir.as_deref() {
        Some(dir) if !dir.trim().is_empty() => router.fallback_service(ServeDir::new(dir)),
        _ => router,
    };

    router.with_state(state)
}

/// Registration and login
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
}

/// Stock table and adjustments (gated)
fn stock_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/stock/list", get(handlers::stock::list_stock))
        .route("/stock/adjust", post(handlers::stock::adjust_stock))
        .route_layer(from_fn_with_state(state.clone(), access_gate))
}

/// Account administration (gated)
fn permission_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/permission/list", get(handlers::permission::list_accounts))
        .route("/permission/activate", post(handlers::permission::set_activated))
        .route("/permission/editor", post(handlers::permission::set_editor))
        .route_layer(from_fn_with_state(state.clone(), access_gate))
}

/// Liveness
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
