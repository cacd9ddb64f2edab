//! Dashboard home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Extension, State};
use url::Url;

use crate::application::views::notice::NOTICE_TTL;
use crate::application::views::dashboard::DELETE_PROMPT;
use crate::application::views::{DashboardView, Notice, clipboard::COPY_RESET_DELAY};
use crate::domain::entities::LinkSummary;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::middleware::session::SessionId;

/// A toast rendered by the page script.
#[derive(Debug, Clone)]
pub struct NoticeView {
    pub level: &'static str,
    pub message: String,
}

impl From<Notice> for NoticeView {
    fn from(notice: Notice) -> Self {
        Self {
            level: notice.level.as_str(),
            message: notice.message,
        }
    }
}

/// Returns `raw` for use in an `href` only if it is an absolute http(s) URL.
///
/// Link URLs come from the backend as stored; anything else (`javascript:`,
/// `data:`, relative paths) is rendered as plain text.
pub(crate) fn safe_href(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let url = Url::parse(raw).ok()?;
    matches!(url.scheme(), "http" | "https").then(|| raw.to_string())
}

/// One row of the history table.
#[derive(Debug, Clone)]
pub struct LinkRow {
    pub original_url: String,
    pub original_href: Option<String>,
    pub short_url: String,
    pub short_href: Option<String>,
    pub short_code: String,
    pub clicks: u64,
    pub created_at: String,
    pub stats_path: String,
    pub delete_path: String,
}

impl LinkRow {
    fn new(link: &LinkSummary, stats_path: String) -> Self {
        Self {
            original_url: link.original_url.clone(),
            original_href: safe_href(&link.original_url),
            short_url: link.short_url.clone(),
            short_href: safe_href(&link.short_url),
            short_code: link.short_code.clone(),
            clicks: link.clicks,
            created_at: link.created_at.format("%Y-%m-%d %H:%M").to_string(),
            stats_path,
            delete_path: format!("/links/{}/delete", urlencoding::encode(&link.short_code)),
        }
    }
}

/// Template for the dashboard home page.
///
/// Renders `templates/dashboard.html`:
/// - Create form (keeps its inputs after a failed submission)
/// - Last created short URL with a copy button
/// - History table with Stats, Copy and Delete actions
/// - Previous/Next pagination
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub form_url: String,
    pub form_custom_code: String,
    pub short_url: Option<String>,
    pub short_href: Option<String>,
    pub links: Vec<LinkRow>,
    pub current_page: u32,
    pub total_pages: u32,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub delete_prompt: &'static str,
    pub notices: Vec<NoticeView>,
    pub notice_ttl_ms: u64,
    pub copy_reset_ms: u64,
}

impl DashboardTemplate {
    /// Snapshots the view and drains its pending notices.
    pub fn from_view(view: &mut DashboardView) -> Self {
        let links = view
            .page()
            .items()
            .iter()
            .map(|link| LinkRow::new(link, view.open_stats(&link.short_code).path().to_string()))
            .collect();

        Self {
            form_url: view.form().url.clone(),
            form_custom_code: view.form().custom_code.clone().unwrap_or_default(),
            short_url: view.short_url().map(str::to_string),
            short_href: view.short_url().and_then(safe_href),
            links,
            current_page: view.page().current_page(),
            total_pages: view.page().total_pages(),
            can_go_previous: view.can_go_previous(),
            can_go_next: view.can_go_next(),
            delete_prompt: DELETE_PROMPT,
            notices: view.take_notices().into_iter().map(NoticeView::from).collect(),
            notice_ttl_ms: NOTICE_TTL.as_millis() as u64,
            copy_reset_ms: COPY_RESET_DELAY.as_millis() as u64,
        }
    }
}

/// Renders the dashboard for the current session.
///
/// # Endpoint
///
/// `GET /`
///
/// The first visit of a session loads page 1 of the history.
pub async fn dashboard_handler(
    State(state): State<AppState>,
    Extension(SessionId(session_id)): Extension<SessionId>,
) -> Result<DashboardTemplate, AppError> {
    let view = state.sessions.view(&session_id, &state.api);

    let page = tokio::spawn(async move {
        let mut view = view.lock_owned().await;
        view.mount().await;
        DashboardTemplate::from_view(&mut view)
    })
    .await?;

    Ok(page)
}
