//! # URL Shortener Dashboard
//!
//! Browser and terminal front ends for a URL shortening backend.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Backend response entities and port traits
//! - **Application Layer** ([`application`]) - Dashboard and analytics views
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest backend client, terminal clipboard
//! - **API Layer** ([`api`]) - JSON health endpoint
//! - **Web Layer** ([`web`]) - Server-rendered dashboard with per-browser sessions
//!
//! All shortening, persistence and analytics happen in the backend; this crate
//! only fetches, holds and renders view state.
//!
//! ## Quick Start
//!
//! ```bash
//! export API_BASE_URL="http://localhost:5000"
//!
//! # Web dashboard on :3000
//! cargo run
//!
//! # Terminal client
//! cargo run --bin links -- shorten https://example.com/a/b/c --copy
//! ```
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;
pub mod web;

pub use error::{AppError, ClientError};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for the CLI and
/// integration tests.
pub mod prelude {
    pub use crate::application::views::{AnalyticsView, DashboardView, Navigation, Notice};
    pub use crate::domain::entities::{LinkPage, LinkStatistics, LinkSummary};
    pub use crate::domain::ports::{Clipboard, Confirmer, ShortenerApi};
    pub use crate::error::{AppError, ClientError};
    pub use crate::infrastructure::backend::{ClientOptions, HttpShortenerClient};
    pub use crate::state::AppState;
}
