//! reqwest implementation of [`ShortenerApi`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use url::Url;

use crate::domain::entities::{
    BackendHealth, CreatedLink, LinkPage, LinkStatistics, NewLinkRequest,
};
use crate::domain::ports::ShortenerApi;
use crate::error::ClientError;

/// Tuning for [`HttpShortenerClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Whole-request timeout. `None` keeps reqwest's default (no timeout).
    pub timeout: Option<Duration>,
    /// Extra attempts after a transient failure.
    pub retry_attempts: usize,
    /// Base of the exponential backoff, in milliseconds.
    pub retry_base_delay_ms: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout: None,
            retry_attempts: 2,
            retry_base_delay_ms: 10,
        }
    }
}

/// Error body emitted by the backend on failure.
///
/// Most endpoints use `error`; the delete endpoint historically used `Error`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,

    #[serde(default, rename = "Error")]
    error_capitalized: Option<String>,
}

/// Client for the shortening backend's REST API.
///
/// # Endpoints
///
/// - `POST   /api/shorten`
/// - `GET    /api/urls?page=N&per_page=M`
/// - `DELETE /api/urls/{code}`
/// - `GET    /api/stats/{code}`
/// - `GET    /health`
///
/// # Retries
///
/// Connection failures, timeouts and 502/503/504 responses are retried with
/// jittered exponential backoff. Creation is only retried when the connection
/// could not be established, since a timed-out POST may already have been applied.
#[derive(Debug, Clone)]
pub struct HttpShortenerClient {
    client: Client,
    base_url: Url,
    options: ClientOptions,
}

impl HttpShortenerClient {
    /// Creates a client for the backend at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if the URL is not an absolute http(s) URL.
    pub fn new(base_url: &str, options: ClientOptions) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;

        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl(format!(
                "expected an http(s) base url, got '{base_url}'"
            )));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
            options,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn retry_strategy(&self) -> impl Iterator<Item = Duration> + use<> {
        ExponentialBackoff::from_millis(self.options.retry_base_delay_ms)
            .max_delay(Duration::from_secs(2))
            .map(jitter)
            .take(self.options.retry_attempts)
    }

    /// Sends a request built by `build`, retrying while `retry_when` holds.
    async fn send<F>(
        &self,
        retry_when: fn(&ClientError) -> bool,
        build: F,
    ) -> Result<Response, ClientError>
    where
        F: Fn() -> RequestBuilder,
    {
        RetryIf::spawn(
            self.retry_strategy(),
            || {
                let request = build();
                async move {
                    let response = request.send().await?;
                    check_status(response).await
                }
            },
            |e: &ClientError| {
                let retry = retry_when(e);
                if retry {
                    tracing::warn!(error = %e, "Transient backend failure, retrying");
                }
                retry
            },
        )
        .await
    }
}

/// Converts non-success responses into [`ClientError::Status`].
async fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.error.or(body.error_capitalized));

    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| ClientError::Decode(e.to_string()))
}

#[async_trait]
impl ShortenerApi for HttpShortenerClient {
    async fn create_link(&self, request: NewLinkRequest) -> Result<CreatedLink, ClientError> {
        let url = self.endpoint(&["api", "shorten"]);
        tracing::debug!(%url, custom_code = ?request.custom_code, "Creating short link");

        let response = self
            .send(ClientError::is_connect, || {
                self.client.post(url.clone()).json(&request)
            })
            .await?;

        decode(response).await
    }

    async fn list_links(&self, page: u32, per_page: u32) -> Result<LinkPage, ClientError> {
        let mut url = self.endpoint(&["api", "urls"]);
        url.query_pairs_mut()
            .append_pair("page", &page.to_string())
            .append_pair("per_page", &per_page.to_string());
        tracing::debug!(%url, "Fetching link history");

        let response = self
            .send(ClientError::is_transient, || self.client.get(url.clone()))
            .await?;

        decode(response).await
    }

    async fn delete_link(&self, short_code: &str) -> Result<(), ClientError> {
        let url = self.endpoint(&["api", "urls", short_code]);
        tracing::debug!(%url, "Deleting short link");

        self.send(ClientError::is_transient, || self.client.delete(url.clone()))
            .await?;

        Ok(())
    }

    async fn get_statistics(&self, short_code: &str) -> Result<LinkStatistics, ClientError> {
        let url = self.endpoint(&["api", "stats", short_code]);
        tracing::debug!(%url, "Fetching link statistics");

        let response = self
            .send(ClientError::is_transient, || self.client.get(url.clone()))
            .await?;

        decode(response).await
    }

    async fn health(&self) -> Result<BackendHealth, ClientError> {
        let url = self.endpoint(&["health"]);

        let response = self
            .send(ClientError::is_transient, || self.client.get(url.clone()))
            .await?;

        decode(response).await
    }
}
