//! Health Check API Tests

use axum::http::{header, HeaderValue, StatusCode};
use serde_json::Value;

use crate::common::TestApp;

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new();

    let response = app.server.get("/health").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "healthy");
}

#[tokio::test]
async fn test_liveness_probe() {
    let app = TestApp::new();

    let response = app.server.get("/health/live").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "alive");
}

#[tokio::test]
async fn test_readiness_on_memory_store() {
    let app = TestApp::new();

    let response = app.server.get("/health/ready").await;
    response.assert_status(StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["storage"]["backend"], "memory");
}

#[tokio::test]
async fn test_metrics_exposed_after_traffic() {
    let app = TestApp::new();
    let (match_id, user, _) = app.create_match().await;
    app.send(match_id, user, "counted").await;

    let response = app.server.get("/metrics").await;
    response.assert_status_ok();
    let text = response.text();
    assert!(text.contains("skillswap_http_requests_total"));
    assert!(text.contains("skillswap_messages_sent_total"));
}

#[tokio::test]
async fn test_cors_headers_on_full_router() {
    let app = TestApp::new();

    let response = app
        .server
        .get("/health")
        .add_header(
            header::ORIGIN,
            HeaderValue::from_static("http://localhost:3000"),
        )
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        Some(&HeaderValue::from_static("*"))
    );
}
