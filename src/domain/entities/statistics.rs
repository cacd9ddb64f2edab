//! Per-link analytics returned by `GET /api/stats/{code}`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

use super::timestamp;

/// Click count for one calendar day.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DailyClicks {
    pub date: NaiveDate,
    pub clicks: u64,
}

/// A single recorded access of a short link.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AccessRecord {
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub accessed_at: DateTime<Utc>,

    #[serde(default)]
    pub ip_address: Option<String>,

    #[serde(default)]
    pub referrer: Option<String>,

    #[serde(default)]
    pub user_agent: Option<String>,
}

/// Analytics for one short link.
///
/// `daily_stats` covers the backend's recent window (30 days); `recent_access`
/// is newest first and bounded by backend retention.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LinkStatistics {
    pub original_url: String,
    pub short_url: String,

    #[serde(default)]
    pub short_code: Option<String>,

    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub total_clicks: u64,

    #[serde(default)]
    pub daily_stats: Vec<DailyClicks>,

    #[serde(default)]
    pub recent_access: Vec<AccessRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_statistics_from_backend_body() {
        let stats: LinkStatistics = serde_json::from_value(json!({
            "original_url": "https://example.com/a/b/c",
            "short_code": "abc123",
            "short_url": "http://localhost:5000/abc123",
            "created_at": "2026-02-01T08:00:00",
            "total_clicks": 7,
            "daily_stats": [
                { "date": "2026-02-01", "clicks": 4 },
                { "date": "2026-02-02", "clicks": 3 }
            ],
            "recent_access": [
                {
                    "accessed_at": "2026-02-02T09:30:00.5",
                    "ip_address": "10.0.0.1",
                    "user_agent": "curl/8.0",
                    "referrer": null
                }
            ]
        }))
        .unwrap();

        assert_eq!(stats.total_clicks, 7);
        assert_eq!(stats.daily_stats.len(), 2);
        assert_eq!(
            stats.daily_stats[0].date,
            NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()
        );
        assert_eq!(stats.recent_access[0].referrer, None);
        assert_eq!(stats.recent_access[0].ip_address.as_deref(), Some("10.0.0.1"));
    }

    #[test]
    fn test_statistics_missing_series_default_to_empty() {
        let stats: LinkStatistics = serde_json::from_value(json!({
            "original_url": "https://example.com",
            "short_url": "http://localhost:5000/x",
            "created_at": "2026-02-01T08:00:00Z"
        }))
        .unwrap();

        assert!(stats.daily_stats.is_empty());
        assert!(stats.recent_access.is_empty());
        assert_eq!(stats.total_clicks, 0);
    }
}
