mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::TestApp;

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "healthy", "version": "1.0.0" }));
}

#[tokio::test]
async fn test_root_lists_endpoints() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "PREHSG Contest Hub API");
    assert_eq!(body["version"], "1.0.0");
    assert_eq!(body["endpoints"]["contests"], "/contests");
}
