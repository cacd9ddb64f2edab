//! Copy-to-clipboard with a transient "copied" indicator.

use std::time::Duration;

use tokio::time::Instant;

use super::notice::{Notice, Notices};
use crate::domain::ports::Clipboard;

/// How long the "Copied!" indicator stays on after a successful copy.
pub const COPY_RESET_DELAY: Duration = Duration::from_secs(2);

pub const COPIED: &str = "Copied to clipboard";
pub const COPY_FAILED: &str = "Failed to copy to clipboard";

/// Tracks whether the copy indicator is currently shown.
#[derive(Debug)]
pub struct CopyIndicator {
    reset_after: Duration,
    shown_until: Option<Instant>,
}

impl Default for CopyIndicator {
    fn default() -> Self {
        Self::new(COPY_RESET_DELAY)
    }
}

impl CopyIndicator {
    pub fn new(reset_after: Duration) -> Self {
        Self {
            reset_after,
            shown_until: None,
        }
    }

    pub fn reset_after(&self) -> Duration {
        self.reset_after
    }

    pub fn is_shown(&self) -> bool {
        self.shown_until
            .is_some_and(|until| Instant::now() < until)
    }

    /// Writes `text` to `clipboard` and reports the outcome through `notices`.
    ///
    /// Returns `true` on success. A rejected write leaves the indicator off.
    pub async fn copy(
        &mut self,
        text: &str,
        clipboard: &dyn Clipboard,
        notices: &mut Notices,
    ) -> bool {
        match clipboard.write_text(text).await {
            Ok(()) => {
                self.shown_until = Some(Instant::now() + self.reset_after);
                notices.push(Notice::info(COPIED));
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "Clipboard write rejected");
                notices.push(Notice::error(COPY_FAILED));
                false
            }
        }
    }
}
