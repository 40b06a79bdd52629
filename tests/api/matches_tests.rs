//! Match API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::TestApp;

#[tokio::test]
async fn test_create_and_get_match() {
    let app = TestApp::new();
    let one = app.create_user().await;
    let two = app.create_user().await;

    let response = app
        .server
        .post("/api/matches")
        .json(&json!({ "userOneId": one, "userTwoId": two }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let created = response.json::<Value>();
    assert_eq!(created["userOneId"], one);
    assert_eq!(created["userTwoId"], two);
    assert!(created["matchedAt"].is_string());

    let fetched = app
        .server
        .get(&format!("/api/matches/{}", created["matchId"]))
        .await
        .json::<Value>();
    assert_eq!(fetched, created);

    let all = app.server.get("/api/matches").await.json::<Value>();
    assert_eq!(all, json!([created]));
}

#[tokio::test]
async fn test_match_requires_existing_users() {
    let app = TestApp::new();
    let one = app.create_user().await;

    let response = app
        .server
        .post("/api/matches")
        .json(&json!({ "userOneId": one, "userTwoId": 999 }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["message"], "User not found");
}

#[tokio::test]
async fn test_self_match_rejected() {
    let app = TestApp::new();
    let one = app.create_user().await;

    let response = app
        .server
        .post("/api/matches")
        .json(&json!({ "userOneId": one, "userTwoId": one }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_match() {
    let app = TestApp::new();

    let response = app.server.get("/api/matches/5").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["message"], "Match not found");
}

#[tokio::test]
async fn test_create_match_missing_field() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/matches")
        .json(&json!({ "userOneId": 1 }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], 10002);
}
