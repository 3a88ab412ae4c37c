//! Saved search enable/disable tests.
//!
//! # Invariants
//! - Toggles go to `/servicesNS/nobody/<app>/saved/searches/<title>/<action>`
//! - Only HTTP 200 is success and a failure is never retried

mod common;

use common::*;
use splunk_client::ClientError;
use wiremock::matchers::{header, method, path, query_param};

#[tokio::test]
async fn test_disable_saved_search() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(
            "/servicesNS/nobody/acme_security/saved/searches/Errors%20Per%20Hour/disable",
        ))
        .and(query_param("output_mode", "json"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut client = token_client(&mock_server.uri(), 3);
    client
        .disable_saved_search("acme_security", "Errors Per Hour")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_enable_saved_search() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(
            "/servicesNS/nobody/search/saved/searches/Nightly%20Rollup/enable",
        ))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut client = token_client(&mock_server.uri(), 3);
    client
        .enable_saved_search("search", "Nightly Rollup")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_toggle_failure_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/servicesNS/nobody/search/saved/searches/s1/disable"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut client = token_client(&mock_server.uri(), 3);
    let err = client.disable_saved_search("search", "s1").await.unwrap_err();
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn test_toggle_non_200_success_is_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/servicesNS/nobody/search/saved/searches/s1/disable"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut client = token_client(&mock_server.uri(), 0);
    let err = client.disable_saved_search("search", "s1").await.unwrap_err();
    assert!(matches!(err, ClientError::ApiError { status: 201, .. }));
}

#[tokio::test]
async fn test_toggle_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/servicesNS/nobody/search/saved/searches/gone/enable"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "messages": [{"type": "ERROR", "text": "Could not find object id=gone"}]
        })))
        .mount(&mock_server)
        .await;

    let mut client = token_client(&mock_server.uri(), 0);
    let err = client.enable_saved_search("search", "gone").await.unwrap_err();
    assert!(err.to_string().contains("Could not find object id=gone"));
}
