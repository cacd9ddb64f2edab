use std::sync::Arc;
use std::time::Duration;

use crate::domain::ports::ShortenerApi;
use crate::web::session::SessionStore;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    /// Backend client, resolved once at startup.
    pub api: Arc<dyn ShortenerApi>,
    /// Per-browser dashboard views.
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(api: Arc<dyn ShortenerApi>, session_idle_timeout: Duration) -> Self {
        Self {
            api,
            sessions: SessionStore::new(session_idle_timeout),
        }
    }
}
