//! Port for the URL shortening backend.

use crate::domain::entities::{BackendHealth, CreatedLink, LinkPage, LinkStatistics, NewLinkRequest};
use crate::error::ClientError;
use async_trait::async_trait;

/// Operations the dashboard needs from the shortening backend.
///
/// # Implementations
///
/// - [`crate::infrastructure::backend::HttpShortenerClient`] - reqwest over HTTP
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortenerApi: Send + Sync {
    /// Creates a short link.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Status`] carrying the backend's message when the
    /// backend rejects the request (e.g. custom code already in use).
    async fn create_link(&self, request: NewLinkRequest) -> Result<CreatedLink, ClientError>;

    /// Fetches one page of link history.
    ///
    /// # Arguments
    ///
    /// - `page` - Page number (1-indexed)
    /// - `per_page` - Number of items per page
    async fn list_links(&self, page: u32, per_page: u32) -> Result<LinkPage, ClientError>;

    /// Deletes a link and its access history.
    async fn delete_link(&self, short_code: &str) -> Result<(), ClientError>;

    /// Fetches analytics for one link.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Status`] with status 404 if the code is unknown.
    async fn get_statistics(&self, short_code: &str) -> Result<LinkStatistics, ClientError>;

    /// Probes backend health.
    async fn health(&self) -> Result<BackendHealth, ClientError>;
}
