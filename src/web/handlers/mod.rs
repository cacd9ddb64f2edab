//! HTML rendering and form handlers for the web dashboard.

mod dashboard;
mod links;
mod stats;

pub use dashboard::{DashboardTemplate, LinkRow, NoticeView, dashboard_handler};
pub use links::{DeleteForm, FormConfirmation, PageForm, delete_handler, page_handler, shorten_handler};
pub use stats::{StatsPage, StatsTemplate, stats_handler};
