//! In-memory store of per-browser dashboard views.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::time::Instant;

use crate::application::views::DashboardView;
use crate::domain::ports::ShortenerApi;

/// A session's dashboard view, shared between the requests of one browser.
pub type SharedView = Arc<tokio::sync::Mutex<DashboardView>>;

struct SessionEntry {
    view: SharedView,
    last_seen: Instant,
}

/// Maps session ids to dashboard views.
///
/// Sessions idle for longer than the configured timeout are evicted on the
/// next lookup.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<String, SessionEntry>>>,
    idle_timeout: Duration,
}

impl SessionStore {
    pub fn new(idle_timeout: Duration) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            idle_timeout,
        }
    }

    /// Generates an opaque session id: 16 random bytes, hex encoded.
    pub fn new_session_id() -> String {
        hex::encode(rand::random::<[u8; 16]>())
    }

    /// Returns the view for `id`, creating it on first use.
    pub fn view(&self, id: &str, api: &Arc<dyn ShortenerApi>) -> SharedView {
        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        let now = Instant::now();

        let before = sessions.len();
        sessions.retain(|_, entry| now.duration_since(entry.last_seen) < self.idle_timeout);
        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::debug!(evicted, "Evicted idle dashboard sessions");
        }

        let entry = sessions.entry(id.to_string()).or_insert_with(|| {
            tracing::debug!("New dashboard session");
            SessionEntry {
                view: Arc::new(tokio::sync::Mutex::new(DashboardView::new(Arc::clone(api)))),
                last_seen: now,
            }
        });
        entry.last_seen = now;
        Arc::clone(&entry.view)
    }

    pub fn len(&self) -> usize {
        self.sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockShortenerApi;

    fn api() -> Arc<dyn ShortenerApi> {
        Arc::new(MockShortenerApi::new())
    }

    #[test]
    fn test_session_ids_are_random_hex() {
        let a = SessionStore::new_session_id();
        let b = SessionStore::new_session_id();
        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_same_id_returns_same_view() {
        let store = SessionStore::new(Duration::from_secs(60));
        let api = api();

        let first = store.view("a", &api);
        let again = store.view("a", &api);
        let other = store.view("b", &api);

        assert!(Arc::ptr_eq(&first, &again));
        assert!(!Arc::ptr_eq(&first, &other));
        assert_eq!(store.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_sessions_are_evicted() {
        let store = SessionStore::new(Duration::from_secs(60));
        let api = api();

        let stale = store.view("stale", &api);
        tokio::time::advance(Duration::from_secs(61)).await;

        let fresh = store.view("fresh", &api);
        assert_eq!(store.len(), 1);

        let recreated = store.view("stale", &api);
        assert!(!Arc::ptr_eq(&stale, &recreated));
        assert!(!Arc::ptr_eq(&fresh, &recreated));
    }
}
