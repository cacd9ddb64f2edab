//! Application layer: view-state for the dashboard and analytics screens.
//!
//! Views own all client-side state and orchestrate backend calls through
//! [`crate::domain::ports::ShortenerApi`]. Front ends (the web layer and the
//! `links` CLI) only render view snapshots and forward user intents.
//!
//! # Available Views
//!
//! - [`views::dashboard::DashboardView`] - Create form and paginated link history
//! - [`views::analytics::AnalyticsView`] - Per-link statistics

pub mod views;
