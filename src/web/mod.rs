//! Web dashboard layer for browser-based UI.
//!
//! Renders dashboard and analytics views with Askama templates. Each browser
//! gets its own [`crate::application::views::DashboardView`], kept in a
//! cookie-keyed [`session::SessionStore`].
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering and form handlers
//! - [`middleware`] - Session cookie middleware
//! - [`routes`] - Dashboard route configuration
//! - [`session`] - Per-browser view store

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod session;
