mod common;

use serde_json::json;
use url_shortener_dashboard::domain::entities::NewLinkRequest;
use url_shortener_dashboard::domain::ports::ShortenerApi;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_create_link_posts_json() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/shorten"))
        .and(body_json(json!({ "url": "https://example.com/a/b/c" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "short_url": "http://localhost:5000/abc123",
            "short_code": "abc123",
            "original_url": "https://example.com/a/b/c",
            "created_at": "2026-02-01T08:00:00.123456",
            "clicks": 0
        })))
        .expect(1)
        .mount(&backend)
        .await;

    let client = common::create_test_client(&backend);
    let created = client
        .create_link(NewLinkRequest {
            url: "https://example.com/a/b/c".to_string(),
            custom_code: None,
        })
        .await
        .unwrap();

    assert_eq!(created.short_url, "http://localhost:5000/abc123");
    assert_eq!(created.short_code.as_deref(), Some("abc123"));
}

#[tokio::test]
async fn test_create_link_surfaces_backend_error() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/shorten"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "error": "Custom code already in Use" })),
        )
        .expect(1)
        .mount(&backend)
        .await;

    let client = common::create_test_client(&backend);
    let err = client
        .create_link(NewLinkRequest {
            url: "https://example.com".to_string(),
            custom_code: Some("taken".to_string()),
        })
        .await
        .unwrap_err();

    assert_eq!(err.backend_message(), Some("Custom code already in Use"));
}

#[tokio::test]
async fn test_create_link_is_not_retried_on_gateway_error() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/shorten"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&backend)
        .await;

    let client = common::create_test_client(&backend);
    let result = client
        .create_link(NewLinkRequest {
            url: "https://example.com".to_string(),
            custom_code: None,
        })
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_list_links_sends_page_query() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/urls"))
        .and(query_param("page", "2"))
        .and(query_param("per_page", "5"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(common::page_json(&["abc123", "xyz789"], 3)),
        )
        .expect(1)
        .mount(&backend)
        .await;

    let client = common::create_test_client(&backend);
    let page = client.list_links(2, 5).await.unwrap();

    assert_eq!(page.urls.len(), 2);
    assert_eq!(page.total_pages(), 3);
    assert_eq!(page.urls[1].short_code, "xyz789");
}

#[tokio::test]
async fn test_delete_link_encodes_code() {
    let backend = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/urls/my%20code"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "URL deleted" })))
        .expect(1)
        .mount(&backend)
        .await;

    let client = common::create_test_client(&backend);
    client.delete_link("my code").await.unwrap();
}

#[tokio::test]
async fn test_delete_link_reads_capitalized_error_key() {
    let backend = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/urls/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "Error": "URL not Found" })))
        .mount(&backend)
        .await;

    let client = common::create_test_client(&backend);
    let err = client.delete_link("missing").await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.backend_message(), Some("URL not Found"));
}

#[tokio::test]
async fn test_statistics_not_found() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stats/deadbeef"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "error": "URL not Found" })))
        .expect(1)
        .mount(&backend)
        .await;

    let client = common::create_test_client(&backend);
    let err = client.get_statistics("deadbeef").await.unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_statistics_decodes_backend_body() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stats/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::stats_json("abc123")))
        .mount(&backend)
        .await;

    let client = common::create_test_client(&backend);
    let stats = client.get_statistics("abc123").await.unwrap();

    assert_eq!(stats.total_clicks, 7);
    assert_eq!(stats.daily_stats.len(), 2);
    assert_eq!(stats.recent_access[1].ip_address, None);
}

#[tokio::test]
async fn test_retries_transient_failure() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stats/abc123"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&backend)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/stats/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::stats_json("abc123")))
        .expect(1)
        .mount(&backend)
        .await;

    let client = common::create_test_client(&backend);
    let stats = client.get_statistics("abc123").await.unwrap();

    assert_eq!(stats.short_url, "http://localhost:5000/abc123");
}

#[tokio::test]
async fn test_gives_up_after_bounded_retries() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/urls"))
        .respond_with(ResponseTemplate::new(502))
        .expect(3)
        .mount(&backend)
        .await;

    let client = common::create_test_client(&backend);
    let err = client.list_links(1, 5).await.unwrap_err();

    assert!(err.is_transient());
}

#[tokio::test]
async fn test_invalid_json_is_a_decode_error() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/urls"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&backend)
        .await;

    let client = common::create_test_client(&backend);
    let err = client.list_links(1, 5).await.unwrap_err();

    assert!(matches!(
        err,
        url_shortener_dashboard::error::ClientError::Decode(_)
    ));
}
