//! Profile API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::TestApp;

#[tokio::test]
async fn test_create_replace_profile() {
    let app = TestApp::new();
    let user = app.create_user().await;

    let response = app
        .server
        .post("/api/profiles")
        .json(&json!({ "userId": user, "bio": "Rustacean", "major": "CS" }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let created = response.json::<Value>();
    assert_eq!(created["bio"], "Rustacean");

    let replaced = app
        .server
        .put(&format!("/api/profiles/{}", created["profileId"]))
        .json(&json!({ "bio": "Gopher", "userId": 12345 }))
        .await;
    replaced.assert_status_ok();
    let replaced = replaced.json::<Value>();
    assert_eq!(replaced["bio"], "Gopher");
    assert_eq!(replaced["major"], Value::Null);
    assert_eq!(replaced["userId"], user);

    let fetched = app
        .server
        .get(&format!("/api/profiles/{}", created["profileId"]))
        .await
        .json::<Value>();
    assert_eq!(fetched, replaced);
    assert_eq!(
        app.server.get("/api/profiles").await.json::<Value>(),
        json!([replaced])
    );
}

#[tokio::test]
async fn test_profile_for_missing_user() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/profiles")
        .json(&json!({ "userId": 77, "bio": "ghost" }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["message"], "User not found");
}

#[tokio::test]
async fn test_missing_profile() {
    let app = TestApp::new();

    let get = app.server.get("/api/profiles/3").await;
    get.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(get.json::<Value>()["message"], "Profile not found");

    let put = app
        .server
        .put("/api/profiles/3")
        .json(&json!({ "bio": "x" }))
        .await;
    put.assert_status(StatusCode::NOT_FOUND);
}
