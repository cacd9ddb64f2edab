//! View-state machines and their building blocks.

pub mod analytics;
pub mod chart;
pub mod clipboard;
pub mod dashboard;
pub mod form;
pub mod navigation;
pub mod notice;
pub mod phase;

pub use analytics::{AccessLog, AccessRow, AnalyticsView, Summary};
pub use chart::{ChartGeometry, ChartSeries};
pub use clipboard::CopyIndicator;
pub use dashboard::{DashboardView, PageState};
pub use form::FormState;
pub use navigation::{Navigation, Route};
pub use notice::{Notice, NoticeLevel, Notices};
pub use phase::{Phase, RequestTracker, Ticket};
