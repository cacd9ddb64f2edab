//! Web dashboard route configuration.

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::state::AppState;
use crate::web::handlers::{
    dashboard_handler, delete_handler, page_handler, shorten_handler, stats_handler,
};
use crate::web::middleware::session;

/// Routes bound to a browser session.
///
/// Protected via [`crate::web::middleware::session`], which issues the
/// session cookie on first visit.
///
/// # Endpoints
///
/// - `GET  /` - Dashboard: create form and link history
/// - `POST /shorten` - Create a short link
/// - `POST /page` - Move through the history
/// - `POST /links/{code}/delete` - Delete a link
pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard_handler))
        .route("/shorten", post(shorten_handler))
        .route("/page", post(page_handler))
        .route("/links/{code}/delete", post(delete_handler))
        .route_layer(middleware::from_fn(session::layer))
}

/// Routes that need no session.
///
/// # Endpoints
///
/// - `GET /stats/{code}` - Statistics page for one link
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/stats/{code}", get(stats_handler))
}
