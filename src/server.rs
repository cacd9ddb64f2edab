//! HTTP server initialization and runtime setup.
//!
//! Builds the backend client, probes the backend, and runs the Axum server
//! until Ctrl-C or SIGTERM.

use crate::config::Config;
use crate::domain::ports::ShortenerApi;
use crate::infrastructure::backend::HttpShortenerClient;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Backend HTTP client (base URL resolved once, shared by every view)
/// - Startup health probe of the backend (a failure is logged, not fatal)
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The backend base URL is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let client = HttpShortenerClient::new(&config.api_base_url, config.client_options())
        .context("Failed to build backend client")?;
    tracing::info!(backend = %client.base_url(), "Backend client ready");

    match client.health().await {
        Ok(health) if health.is_healthy() => tracing::info!("Backend is healthy"),
        Ok(health) => tracing::warn!(status = %health.status, "Backend reports degraded health"),
        Err(e) => tracing::warn!(error = %e, "Backend health check failed, continuing"),
    }

    let api: Arc<dyn ShortenerApi> = Arc::new(client);
    let state = AppState::new(api, config.session_idle_timeout());

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
