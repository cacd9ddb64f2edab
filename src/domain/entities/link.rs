//! Link history entities and the create call payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

/// One row of the link history as returned by `GET /api/urls`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LinkSummary {
    pub id: i64,
    pub original_url: String,
    pub short_url: String,
    pub short_code: String,
    #[serde(default)]
    pub clicks: u64,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
}

/// One page of link history plus the page count.
///
/// The page count is read from `totalPages`; the `pages` key used by older
/// backends is accepted as a fallback.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LinkPage {
    #[serde(default)]
    pub urls: Vec<LinkSummary>,

    #[serde(default, rename = "totalPages")]
    total_pages: Option<u32>,

    #[serde(default)]
    pages: Option<u32>,

    #[serde(default)]
    pub total: Option<u64>,
}

impl LinkPage {
    pub fn new(urls: Vec<LinkSummary>, total_pages: u32) -> Self {
        Self {
            urls,
            total_pages: Some(total_pages),
            pages: None,
            total: None,
        }
    }

    /// Number of pages reported by the backend, never less than 1.
    pub fn total_pages(&self) -> u32 {
        self.total_pages
            .or(self.pages)
            .filter(|&pages| pages > 0)
            .unwrap_or(1)
    }
}

/// Body of `POST /api/shorten`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewLinkRequest {
    pub url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_code: Option<String>,
}

/// Successful response of `POST /api/shorten`.
///
/// Only `short_url` is relied upon; the remaining fields are informational.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreatedLink {
    pub short_url: String,

    #[serde(default)]
    pub short_code: Option<String>,

    #[serde(default)]
    pub original_url: Option<String>,

    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub clicks: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn summary_json(code: &str) -> serde_json::Value {
        json!({
            "id": 1,
            "original_url": "https://example.com",
            "short_url": format!("http://localhost:5000/{code}"),
            "short_code": code,
            "created_at": "2026-01-01T12:00:00.000001",
            "clicks": 3
        })
    }

    #[test]
    fn test_page_reads_total_pages() {
        let page: LinkPage = serde_json::from_value(json!({
            "urls": [summary_json("abc123")],
            "totalPages": 4
        }))
        .unwrap();

        assert_eq!(page.total_pages(), 4);
        assert_eq!(page.urls.len(), 1);
        assert_eq!(page.urls[0].clicks, 3);
    }

    #[test]
    fn test_page_falls_back_to_pages_key() {
        let page: LinkPage = serde_json::from_value(json!({
            "urls": [],
            "total": 12,
            "pages": 3,
            "current_page": 1
        }))
        .unwrap();

        assert_eq!(page.total_pages(), 3);
        assert_eq!(page.total, Some(12));
    }

    #[test]
    fn test_page_without_count_has_one_page() {
        let page: LinkPage = serde_json::from_value(json!({ "urls": [] })).unwrap();
        assert_eq!(page.total_pages(), 1);

        let zero: LinkPage = serde_json::from_value(json!({ "urls": [], "totalPages": 0 })).unwrap();
        assert_eq!(zero.total_pages(), 1);
    }

    #[test]
    fn test_new_link_request_omits_missing_code() {
        let request = NewLinkRequest {
            url: "https://example.com".to_string(),
            custom_code: None,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "url": "https://example.com" })
        );
    }

    #[test]
    fn test_created_link_minimal_body() {
        let created: CreatedLink =
            serde_json::from_value(json!({ "short_url": "http://localhost:5000/abc123" })).unwrap();
        assert_eq!(created.short_url, "http://localhost:5000/abc123");
        assert!(created.created_at.is_none());
    }
}
