//! Analytics view: statistics for a single short code.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::chart::ChartSeries;
use super::clipboard::CopyIndicator;
use super::notice::{Notice, Notices};
use super::phase::{Phase, RequestTracker, Ticket};
use crate::domain::entities::{AccessRecord, LinkStatistics};
use crate::domain::ports::{Clipboard, ShortenerApi};
use crate::error::ClientError;

pub const STATS_LOAD_FAILED: &str =
    "Failed to load statistics. The URL may not exist or has been deleted.";
pub const STATS_FAILED_NOTICE: &str = "Failed to load statistics";
pub const NO_ACTIVITY: &str = "No recent activity to display.";
pub const UNKNOWN: &str = "Unknown";
pub const DIRECT: &str = "Direct";

/// Headline facts about a link.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub original_url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub total_clicks: u64,
}

/// One access log row with placeholders filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessRow {
    pub accessed_at: DateTime<Utc>,
    pub ip_address: String,
    pub referrer: String,
    pub user_agent: String,
}

impl From<&AccessRecord> for AccessRow {
    fn from(record: &AccessRecord) -> Self {
        Self {
            accessed_at: record.accessed_at,
            ip_address: or_placeholder(&record.ip_address, UNKNOWN),
            referrer: or_placeholder(&record.referrer, DIRECT),
            user_agent: or_placeholder(&record.user_agent, UNKNOWN),
        }
    }
}

fn or_placeholder(value: &Option<String>, placeholder: &str) -> String {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(placeholder)
        .to_string()
}

#[derive(Debug, Clone, PartialEq)]
pub enum AccessLog {
    /// Nothing recorded yet; render [`NO_ACTIVITY`].
    Empty,
    Rows(Vec<AccessRow>),
}

impl AccessLog {
    pub fn from_records(records: &[AccessRecord]) -> Self {
        if records.is_empty() {
            Self::Empty
        } else {
            Self::Rows(records.iter().map(AccessRow::from).collect())
        }
    }
}

/// State of the statistics screen for one short link.
///
/// The whole screen follows a single [`Phase`]: loading, the loaded
/// statistics, or the error text shown as a full page.
///
/// # Example
///
/// ```rust,ignore
/// let mut view = AnalyticsView::new(api);
/// view.load_statistics("abc123").await;
///
/// match view.summary() {
///     Some(summary) => println!("{} clicks", summary.total_clicks),
///     None => println!("{}", view.state().error().unwrap_or_default()),
/// }
/// ```
pub struct AnalyticsView {
    api: Arc<dyn ShortenerApi>,
    short_code: Option<String>,
    state: Phase<LinkStatistics>,
    tracker: RequestTracker,
    notices: Notices,
    copy: CopyIndicator,
}

impl AnalyticsView {
    /// Creates a view with nothing requested yet.
    pub fn new(api: Arc<dyn ShortenerApi>) -> Self {
        Self {
            api,
            short_code: None,
            state: Phase::Idle,
            tracker: RequestTracker::default(),
            notices: Notices::default(),
            copy: CopyIndicator::default(),
        }
    }

    /// Loads statistics for `short_code`.
    ///
    /// Runs once per distinct code; repeating the same code is a no-op.
    ///
    /// # Arguments
    ///
    /// * `short_code` - Code of the link to load
    ///
    /// Any failure, 404 included, ends in [`Phase::Failed`] with
    /// [`STATS_LOAD_FAILED`] and a [`STATS_FAILED_NOTICE`] notice.
    pub async fn load_statistics(&mut self, short_code: &str) {
        let Some(ticket) = self.begin_load(short_code) else {
            return;
        };
        let result = self.api.get_statistics(short_code).await;
        self.apply_statistics(ticket, result);
    }

    /// Marks a load of `short_code` as started.
    ///
    /// Returns `None` if that code was already requested.
    pub fn begin_load(&mut self, short_code: &str) -> Option<Ticket> {
        if self.short_code.as_deref() == Some(short_code) && !self.state.is_idle() {
            return None;
        }

        self.short_code = Some(short_code.to_string());
        self.state = Phase::Loading;
        Some(self.tracker.issue())
    }

    /// Applies a statistics response. Returns `false` for superseded requests.
    pub fn apply_statistics(
        &mut self,
        ticket: Ticket,
        result: Result<LinkStatistics, ClientError>,
    ) -> bool {
        if !self.tracker.is_current(ticket) {
            tracing::debug!("Discarding stale statistics response");
            return false;
        }

        match result {
            Ok(stats) => {
                self.state = Phase::Ready(stats);
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    short_code = self.short_code.as_deref().unwrap_or_default(),
                    "Failed to load statistics"
                );
                self.notices.push(Notice::error(STATS_FAILED_NOTICE));
                self.state = Phase::Failed(STATS_LOAD_FAILED.to_string());
            }
        }
        true
    }

    pub fn short_code(&self) -> Option<&str> {
        self.short_code.as_deref()
    }

    pub fn state(&self) -> &Phase<LinkStatistics> {
        &self.state
    }

    /// Link details for the header cards. `None` until statistics are loaded.
    pub fn summary(&self) -> Option<Summary> {
        self.state.value().map(|stats| Summary {
            original_url: stats.original_url.clone(),
            short_url: stats.short_url.clone(),
            created_at: stats.created_at,
            total_clicks: stats.total_clicks,
        })
    }

    /// Daily click series for the chart, in backend order.
    pub fn time_series(&self) -> Option<ChartSeries> {
        self.state
            .value()
            .map(|stats| ChartSeries::from_daily(&stats.daily_stats))
    }

    /// Recent accesses, newest first, with placeholders for missing fields.
    pub fn access_log(&self) -> Option<AccessLog> {
        self.state
            .value()
            .map(|stats| AccessLog::from_records(&stats.recent_access))
    }

    /// Copies the short URL. Same contract as
    /// [`super::dashboard::DashboardView::copy_short_url`].
    pub async fn copy_short_url(&mut self, text: &str, clipboard: &dyn Clipboard) -> bool {
        self.copy.copy(text, clipboard, &mut self.notices).await
    }

    pub fn is_copied(&self) -> bool {
        self.copy.is_shown()
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.notices.drain()
    }
}
