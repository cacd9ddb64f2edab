//! Dashboard view: the create form plus the paginated link history.
//!
//! The view owns its state and every operation takes `&mut self`, so at most
//! one backend call per view is in flight. Front ends render snapshots through
//! the getters and drain [`Notice`]s after each operation.

use std::sync::Arc;

use validator::Validate;

use super::clipboard::CopyIndicator;
use super::form::{FormState, first_message};
use super::navigation::{Navigation, Route};
use super::notice::{Notice, Notices};
use super::phase::{Phase, RequestTracker, Ticket};
use crate::domain::entities::{LinkPage, LinkSummary};
use crate::domain::ports::{Clipboard, Confirmer, ShortenerApi};
use crate::error::ClientError;

/// Rows per history page.
pub const PAGE_SIZE: u32 = 5;

pub const LINK_CREATED: &str = "URL shortened successfully";
pub const CREATE_FAILED: &str = "Failed to shorten the URL";
pub const HISTORY_FAILED: &str = "Error fetching the URL history";
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this URL?";
pub const LINK_DELETED: &str = "URL deleted successfully";
pub const DELETE_FAILED: &str = "Failed to delete the URL";

/// The displayed page of history.
///
/// `current_page` is always within `1..=total_pages`.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    current_page: u32,
    total_pages: u32,
    items: Vec<LinkSummary>,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            items: Vec::new(),
        }
    }
}

impl PageState {
    pub fn new(current_page: u32, total_pages: u32, items: Vec<LinkSummary>) -> Self {
        let total_pages = total_pages.max(1);
        Self {
            current_page: current_page.clamp(1, total_pages),
            total_pages,
            items,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn items(&self) -> &[LinkSummary] {
        &self.items
    }

    /// Moves back to page 1 ahead of a re-fetch, keeping the rows shown until it lands.
    pub fn reset_to_first(&mut self) {
        self.current_page = 1;
    }

    /// Page reached by moving `delta` pages, clamped into range.
    pub fn clamp_target(&self, delta: i32) -> u32 {
        let target = i64::from(self.current_page) + i64::from(delta);
        // Bounded by total_pages, so the cast cannot truncate.
        target.clamp(1, i64::from(self.total_pages)) as u32
    }
}

/// Outcome of applying one history response.
#[derive(Debug, PartialEq, Eq)]
enum HistoryOutcome {
    Applied,
    Stale,
    Failed,
    PastEnd { last_page: u32 },
}

/// State of the dashboard screen: the create form, the last created short URL
/// and one page of link history.
///
/// Each operation has its own [`Phase`]. History responses carry a [`Ticket`]
/// so a slow response for a page the user already left is dropped.
///
/// # Example
///
/// ```rust,ignore
/// let mut view = DashboardView::new(api);
/// view.mount().await;
///
/// if view.submit_new_link("https://example.com/a/b/c", None).await {
///     println!("{}", view.short_url().unwrap_or_default());
/// }
/// ```
pub struct DashboardView {
    api: Arc<dyn ShortenerApi>,
    form: FormState,
    short_url: Option<String>,
    page: PageState,
    history: Phase,
    submission: Phase,
    deletion: Phase,
    copy: CopyIndicator,
    notices: Notices,
    tracker: RequestTracker,
    mounted: bool,
}

impl DashboardView {
    /// Creates an unmounted view on page 1 with an empty form.
    pub fn new(api: Arc<dyn ShortenerApi>) -> Self {
        Self {
            api,
            form: FormState::default(),
            short_url: None,
            page: PageState::default(),
            history: Phase::Idle,
            submission: Phase::Idle,
            deletion: Phase::Idle,
            copy: CopyIndicator::default(),
            notices: Notices::default(),
            tracker: RequestTracker::default(),
            mounted: false,
        }
    }

    /// Loads the first page the first time the view is shown.
    pub async fn mount(&mut self) {
        if !self.mounted {
            self.load_history(1).await;
        }
    }

    /// Replaces the form inputs and submits them.
    ///
    /// # Arguments
    ///
    /// * `url` - Long URL to shorten
    /// * `custom_code` - Requested short code; blank means backend-generated
    ///
    /// Returns `true` once the backend has created the link. Ignored while a
    /// previous submission is still in flight.
    pub async fn submit_new_link(&mut self, url: &str, custom_code: Option<&str>) -> bool {
        if self.submission.is_loading() {
            tracing::debug!("Submission already in flight, ignoring");
            return false;
        }
        self.form = FormState::new(url, custom_code.map(str::to_string));
        self.submit().await
    }

    /// Submits the current form.
    ///
    /// Validation runs first; a blank URL never reaches the backend. On
    /// success the form is cleared and history reloads from page 1. On
    /// failure the form is left as it was.
    pub async fn submit(&mut self) -> bool {
        if self.submission.is_loading() {
            tracing::debug!("Submission already in flight, ignoring");
            return false;
        }

        if let Err(errors) = self.form.validate() {
            let message = first_message(&errors);
            self.notices.push(Notice::error(message.clone()));
            self.submission = Phase::Failed(message);
            return false;
        }

        self.submission = Phase::Loading;
        let request = self.form.to_request();

        match self.api.create_link(request).await {
            Ok(created) => {
                tracing::info!(short_url = %created.short_url, "Short link created");
                self.short_url = Some(created.short_url);
                self.form.clear();
                self.submission = Phase::Ready(());
                self.notices.push(Notice::success(LINK_CREATED));
                self.page.reset_to_first();
                self.load_history(1).await;
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to create short link");
                let message = e.backend_message().unwrap_or(CREATE_FAILED).to_string();
                self.notices.push(Notice::error(message.clone()));
                self.submission = Phase::Failed(message);
                false
            }
        }
    }

    /// Fetches one page of history.
    ///
    /// If the backend reports fewer pages than `page`, the last existing page
    /// is fetched instead, once. A 404 for a page past the first one is read
    /// the same way and the previous page is fetched. On any other failure the
    /// previously displayed page is kept as is.
    ///
    /// # Arguments
    ///
    /// * `page` - 1-based page number; 0 is treated as 1
    pub async fn load_history(&mut self, page: u32) {
        let mut page = page.max(1);
        let mut allow_redirect = true;

        loop {
            let ticket = self.begin_history();
            let result = self.api.list_links(page, PAGE_SIZE).await;

            match self.apply_history(ticket, page, result, allow_redirect) {
                HistoryOutcome::PastEnd { last_page } => {
                    tracing::debug!(requested = page, last_page, "Page past the end, refetching");
                    page = last_page;
                    allow_redirect = false;
                }
                _ => break,
            }
        }
    }

    fn begin_history(&mut self) -> Ticket {
        self.mounted = true;
        self.history = Phase::Loading;
        self.tracker.issue()
    }

    fn apply_history(
        &mut self,
        ticket: Ticket,
        requested_page: u32,
        result: Result<LinkPage, ClientError>,
        allow_redirect: bool,
    ) -> HistoryOutcome {
        if !self.tracker.is_current(ticket) {
            tracing::debug!(page = requested_page, "Discarding stale history response");
            return HistoryOutcome::Stale;
        }

        match result {
            Ok(page) => {
                let total_pages = page.total_pages();
                if requested_page > total_pages && allow_redirect {
                    return HistoryOutcome::PastEnd {
                        last_page: total_pages,
                    };
                }

                self.page = PageState::new(requested_page, total_pages, page.urls);
                self.history = Phase::Ready(());
                HistoryOutcome::Applied
            }
            // The backend answers 404 for a page past the end instead of a smaller count.
            Err(e) if e.is_not_found() && requested_page > 1 && allow_redirect => {
                HistoryOutcome::PastEnd {
                    last_page: requested_page - 1,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, page = requested_page, "Failed to fetch link history");
                self.notices.push(Notice::error(HISTORY_FAILED));
                self.history = Phase::Failed(HISTORY_FAILED.to_string());
                HistoryOutcome::Failed
            }
        }
    }

    /// Moves `delta` pages. Does nothing when already at the boundary.
    pub async fn change_page(&mut self, delta: i32) {
        let target = self.page.clamp_target(delta);
        if target == self.page.current_page() {
            return;
        }
        self.load_history(target).await;
    }

    pub fn can_go_previous(&self) -> bool {
        self.page.current_page() > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.page.current_page() < self.page.total_pages()
    }

    /// Deletes a link after confirmation, then refreshes the current page.
    ///
    /// # Arguments
    ///
    /// * `short_code` - Code of the link to delete
    /// * `confirmer` - Asked with [`DELETE_PROMPT`] before any request is made
    ///
    /// Returns `false` if the user declined or the backend call failed. A
    /// decline leaves [`Self::deletion`] idle.
    pub async fn delete_link(&mut self, short_code: &str, confirmer: &dyn Confirmer) -> bool {
        if !confirmer.confirm(DELETE_PROMPT) {
            return false;
        }

        self.deletion = Phase::Loading;
        match self.api.delete_link(short_code).await {
            Ok(()) => {
                tracing::info!(short_code, "Short link deleted");
                self.deletion = Phase::Ready(());
                self.notices.push(Notice::success(LINK_DELETED));
                self.load_history(self.page.current_page()).await;
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, short_code, "Failed to delete short link");
                self.deletion = Phase::Failed(DELETE_FAILED.to_string());
                self.notices.push(Notice::error(DELETE_FAILED));
                false
            }
        }
    }

    /// Writes `text` to `clipboard` and raises the copy indicator for
    /// [`super::clipboard::COPY_RESET_DELAY`].
    ///
    /// A rejected write produces an error notice and returns `false`.
    pub async fn copy_short_url(&mut self, text: &str, clipboard: &dyn Clipboard) -> bool {
        self.copy.copy(text, clipboard, &mut self.notices).await
    }

    /// Where the statistics of `short_code` open. Front ends show it in a
    /// new tab or print it; the dashboard itself stays as it is.
    pub fn open_stats(&self, short_code: &str) -> Navigation {
        Navigation::NewContext(
            Route::Analytics {
                short_code: short_code.to_string(),
            }
            .path(),
        )
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn short_url(&self) -> Option<&str> {
        self.short_url.as_deref()
    }

    pub fn page(&self) -> &PageState {
        &self.page
    }

    pub fn history(&self) -> &Phase {
        &self.history
    }

    pub fn submission(&self) -> &Phase {
        &self.submission
    }

    pub fn deletion(&self) -> &Phase {
        &self.deletion
    }

    /// Whether the "Copied!" indicator is currently shown.
    pub fn is_copied(&self) -> bool {
        self.copy.is_shown()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Removes and returns the notices that are still visible.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.notices.drain()
    }
}
