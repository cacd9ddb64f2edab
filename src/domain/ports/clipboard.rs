//! Port for writing text to a clipboard.

use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("clipboard write failed: {0}")]
    Write(#[from] std::io::Error),
}

/// A clipboard that can be written to.
///
/// Writes may be rejected (permissions, no attached terminal); callers turn the
/// rejection into a user-facing notice.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}
