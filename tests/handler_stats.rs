mod common;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_stats_page_renders_summary_chart_and_log() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stats/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::stats_json("abc123")))
        .expect(1)
        .mount(&backend)
        .await;

    let server = common::create_test_server(&backend);
    let response = server.get("/stats/abc123").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("URL Analytics"));
    assert!(html.contains("Daily Clicks (Last 30 Days)"));
    assert!(html.contains("<polyline"));
    assert!(html.contains("10.0.0.1"));
    assert!(html.contains("Direct"));
    assert!(html.contains("Unknown"));
    assert!(html.contains("2026-02-01 08:00:00 UTC"));
}

#[tokio::test]
async fn test_stats_not_found_shows_error_page() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stats/deadbeef"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "error": "URL not Found" })))
        .mount(&backend)
        .await;

    let server = common::create_test_server(&backend);
    let html = server.get("/stats/deadbeef").await.text();

    assert!(html.contains("Failed to load statistics. The URL may not exist or has been deleted."));
    assert!(html.contains("Go Back"));
    assert!(!html.contains("URL Details"));
}

#[tokio::test]
async fn test_stats_without_activity_shows_empty_states() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stats/quiet1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "original_url": "https://example.com",
            "short_code": "quiet1",
            "short_url": "http://localhost:5000/quiet1",
            "created_at": "2026-02-01T08:00:00",
            "total_clicks": 0,
            "daily_stats": [],
            "recent_access": []
        })))
        .mount(&backend)
        .await;

    let server = common::create_test_server(&backend);
    let html = server.get("/stats/quiet1").await.text();

    assert!(html.contains("No recent activity to display."));
    assert!(!html.contains("<polyline"));
    assert!(!html.contains("<circle"));
}

#[tokio::test]
async fn test_stats_page_does_not_link_script_urls() {
    let backend = MockServer::start().await;
    let mut stats = common::stats_json("xss001");
    stats["original_url"] = json!("javascript:alert(1)");
    Mock::given(method("GET"))
        .and(path("/api/stats/xss001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stats))
        .mount(&backend)
        .await;

    let server = common::create_test_server(&backend);
    let html = server.get("/stats/xss001").await.text();

    assert!(html.contains("javascript:alert(1)"));
    assert!(!html.contains(r#"href="javascript:"#));
    assert!(html.contains(r#"href="http://localhost:5000/xss001""#));
}
