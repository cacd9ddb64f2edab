//! Link statistics page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};

use super::dashboard::{NoticeView, safe_href};
use crate::application::views::analytics::NO_ACTIVITY;
use crate::application::views::clipboard::COPY_RESET_DELAY;
use crate::application::views::notice::NOTICE_TTL;
use crate::application::views::{AccessLog, AnalyticsView, ChartGeometry};
use crate::state::AppState;

const CHART_WIDTH: u32 = 720;
const CHART_HEIGHT: u32 = 280;

/// One rendered access log row.
#[derive(Debug, Clone)]
pub struct AccessRowView {
    pub accessed_at: String,
    pub ip_address: String,
    pub referrer: String,
    pub user_agent: String,
}

/// Everything shown once statistics have loaded.
#[derive(Debug, Clone)]
pub struct StatsPage {
    pub original_url: String,
    pub original_href: Option<String>,
    pub short_url: String,
    pub short_href: Option<String>,
    pub created_at: String,
    pub total_clicks: u64,
    pub chart_title: &'static str,
    pub chart_empty: bool,
    pub chart: ChartGeometry,
    pub access_rows: Vec<AccessRowView>,
}

/// Template for the link statistics page.
///
/// Renders `templates/stats.html` with either the loaded statistics or a
/// full-page error with a "Go Back" control.
#[derive(Template, WebTemplate)]
#[template(path = "stats.html")]
pub struct StatsTemplate {
    pub short_code: String,
    pub stats: Option<StatsPage>,
    pub error: Option<String>,
    pub no_activity: &'static str,
    pub notices: Vec<NoticeView>,
    pub notice_ttl_ms: u64,
    pub copy_reset_ms: u64,
}

impl StatsTemplate {
    pub fn from_view(short_code: &str, view: &mut AnalyticsView) -> Self {
        let stats = view.summary().zip(view.time_series()).map(|(summary, series)| {
            let access_rows = match view.access_log() {
                Some(AccessLog::Rows(rows)) => rows
                    .into_iter()
                    .map(|row| AccessRowView {
                        accessed_at: row.accessed_at.format("%Y-%m-%d %H:%M:%S").to_string(),
                        ip_address: row.ip_address,
                        referrer: row.referrer,
                        user_agent: row.user_agent,
                    })
                    .collect(),
                Some(AccessLog::Empty) | None => Vec::new(),
            };

            StatsPage {
                original_href: safe_href(&summary.original_url),
                original_url: summary.original_url,
                short_href: safe_href(&summary.short_url),
                short_url: summary.short_url,
                created_at: summary.created_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
                total_clicks: summary.total_clicks,
                chart_title: series.title,
                chart_empty: series.is_empty(),
                chart: ChartGeometry::layout(&series, CHART_WIDTH, CHART_HEIGHT),
                access_rows,
            }
        });

        Self {
            short_code: short_code.to_string(),
            stats,
            error: view.state().error().map(str::to_string),
            no_activity: NO_ACTIVITY,
            notices: view.take_notices().into_iter().map(NoticeView::from).collect(),
            notice_ttl_ms: NOTICE_TTL.as_millis() as u64,
            copy_reset_ms: COPY_RESET_DELAY.as_millis() as u64,
        }
    }
}

/// Renders the statistics page for a specific link.
///
/// # Endpoint
///
/// `GET /stats/{code}`
///
/// Statistics are fetched from the backend before rendering; each request
/// uses its own view.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> StatsTemplate {
    let mut view = AnalyticsView::new(state.api.clone());
    view.load_statistics(&code).await;
    StatsTemplate::from_view(&code, &mut view)
}
