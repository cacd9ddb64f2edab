#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use url_shortener_dashboard::domain::ports::ShortenerApi;
use url_shortener_dashboard::infrastructure::backend::{ClientOptions, HttpShortenerClient};
use url_shortener_dashboard::routes::router;
use url_shortener_dashboard::state::AppState;
use wiremock::MockServer;

pub fn create_test_client(backend: &MockServer) -> HttpShortenerClient {
    HttpShortenerClient::new(
        &backend.uri(),
        ClientOptions {
            timeout: Some(Duration::from_secs(5)),
            retry_attempts: 2,
            retry_base_delay_ms: 1,
        },
    )
    .unwrap()
}

pub fn create_test_state(backend: &MockServer) -> AppState {
    let api: Arc<dyn ShortenerApi> = Arc::new(create_test_client(backend));
    AppState::new(api, Duration::from_secs(60))
}

pub fn create_test_server(backend: &MockServer) -> TestServer {
    TestServer::new(router(create_test_state(backend))).unwrap()
}

pub fn link_json(id: i64, code: &str) -> Value {
    json!({
        "id": id,
        "original_url": format!("https://example.com/{code}"),
        "short_url": format!("http://localhost:5000/{code}"),
        "short_code": code,
        "created_at": "2026-02-01T08:00:00",
        "clicks": id * 2
    })
}

pub fn page_json(codes: &[&str], total_pages: u32) -> Value {
    let urls: Vec<Value> = codes
        .iter()
        .enumerate()
        .map(|(i, code)| link_json(i as i64 + 1, code))
        .collect();

    json!({
        "urls": urls,
        "total": codes.len(),
        "pages": total_pages,
        "current_page": 1
    })
}

pub fn stats_json(code: &str) -> Value {
    json!({
        "original_url": "https://example.com/a/b/c",
        "short_code": code,
        "short_url": format!("http://localhost:5000/{code}"),
        "created_at": "2026-02-01T08:00:00",
        "total_clicks": 7,
        "daily_stats": [
            { "date": "2026-02-01", "clicks": 4 },
            { "date": "2026-02-02", "clicks": 3 }
        ],
        "recent_access": [
            {
                "accessed_at": "2026-02-02T09:30:00",
                "ip_address": "10.0.0.1",
                "user_agent": "curl/8.0",
                "referrer": ""
            },
            {
                "accessed_at": "2026-02-01T18:05:00",
                "ip_address": null,
                "user_agent": "Mozilla/5.0",
                "referrer": "https://news.example.com/"
            }
        ]
    })
}
