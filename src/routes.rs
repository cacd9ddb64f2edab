//! Top-level router combining the dashboard pages and the health endpoint.
//!
//! # Route Structure
//!
//! - `GET  /`                     - Dashboard (session cookie issued on first visit)
//! - `POST /shorten`              - Create form submission
//! - `POST /page`                 - History pagination
//! - `POST /links/{code}/delete`  - Delete a link
//! - `GET  /stats/{code}`         - Per-link analytics
//! - `GET  /health`               - Dashboard and backend health (JSON)
//!
//! Anything else answers with a JSON `not_found` error.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Session** - Cookie-keyed dashboard views (session routes only)
//! - **Path normalization** - Trailing slash handling

use axum::Router;
use axum::http::Uri;
use axum::routing::get;
use serde_json::json;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api::handlers::health_handler;
use crate::error::AppError;
use crate::state::AppState;
use crate::telemetry::http_trace_layer;
use crate::web;

/// Builds the router with all routes and middleware except path normalization.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::session_routes())
        .merge(web::routes::public_routes())
        .route("/health", get(health_handler))
        .fallback(route_not_found)
        .with_state(state)
        .layer(http_trace_layer())
}

async fn route_not_found(uri: Uri) -> AppError {
    AppError::not_found("Route not found", json!({ "path": uri.path() }))
}

/// Constructs the application router served by the binary.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
