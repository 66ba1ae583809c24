//! Route definitions and router construction.
//!
//! Every route answers unsupported methods with the same 404 as unknown
//! paths, so the surface only ever reveals the endpoints below.

use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::bootstrap::AxumContext;
use crate::guard::security_headers;
use crate::handlers::{self, not_found};
use crate::state::AppState;

/// Read-only pages and status endpoints.
fn view_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::pages::dashboard).fallback(not_found),
        )
        .route(
            "/logs",
            get(handlers::pages::dashboard).fallback(not_found),
        )
        .route(
            "/api/status",
            get(handlers::status::status).fallback(not_found),
        )
        .route(
            "/favicon.ico",
            get(handlers::pages::favicon).fallback(not_found),
        )
}

/// State-changing actions, wrapped in the security header middleware.
fn action_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/clear",
            post(handlers::actions::clear).fallback(not_found),
        )
        .route("/run", post(handlers::actions::run).fallback(not_found))
        .route_layer(middleware::from_fn(security_headers))
}

/// Create the dashboard router.
pub fn create_router(ctx: AxumContext) -> Router {
    let state: AppState = Arc::new(ctx);

    Router::new()
        .merge(view_routes())
        .merge(action_routes())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
