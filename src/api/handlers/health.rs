//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns dashboard health with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Backend reachable and healthy
/// - **503 Service Unavailable**: Backend unreachable or degraded
///
/// # Components Checked
///
/// 1. **Backend**: Calls the shortening backend's `/health`
/// 2. **Sessions**: Reports the number of live dashboard sessions
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "backend": {
///       "status": "ok",
///       "message": "Backend healthy, database: connected"
///     },
///     "sessions": {
///       "status": "ok",
///       "message": "Active: 3"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let backend_check = check_backend(&state).await;

    let sessions_check = CheckStatus::ok(format!("Active: {}", state.sessions.len()));

    let all_healthy = backend_check.is_ok() && sessions_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            backend: backend_check,
            sessions: sessions_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks the shortening backend via its health endpoint.
async fn check_backend(state: &AppState) -> CheckStatus {
    match state.api.health().await {
        Ok(health) if health.is_healthy() => {
            let database = health.database.as_deref().unwrap_or("unknown");
            CheckStatus::ok(format!("Backend healthy, database: {database}"))
        }
        Ok(health) => CheckStatus::error(format!("Backend reports status '{}'", health.status)),
        Err(e) => CheckStatus::error(format!("Backend error: {e}")),
    }
}
