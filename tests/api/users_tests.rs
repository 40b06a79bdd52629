//! User API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{fake_user, TestApp};

#[tokio::test]
async fn test_create_and_get_user() {
    let app = TestApp::new();
    let body = fake_user();

    let response = app.server.post("/api/users").json(&body).await;
    response.assert_status(StatusCode::CREATED);
    let created = response.json::<Value>();
    assert_eq!(created["email"], body["email"]);

    let fetched = app
        .server
        .get(&format!("/api/users/{}", created["userId"]))
        .await;
    fetched.assert_status_ok();
    assert_eq!(fetched.json::<Value>(), created);
}

#[tokio::test]
async fn test_list_users() {
    let app = TestApp::new();
    app.create_user().await;
    app.create_user().await;

    let users = app.server.get("/api/users").await.json::<Value>();
    assert_eq!(users.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_missing_user_names_id() {
    let app = TestApp::new();

    let response = app.server.get("/api/users/42").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>()["message"],
        "User not found for this id :: 42"
    );
}

#[tokio::test]
async fn test_partial_update_keeps_other_fields() {
    let app = TestApp::new();
    let body = fake_user();
    let created = app.server.post("/api/users").json(&body).await.json::<Value>();

    let response = app
        .server
        .put(&format!("/api/users/{}", created["userId"]))
        .json(&json!({ "university": "Open University", "email": null }))
        .await;
    response.assert_status_ok();

    let updated = response.json::<Value>();
    assert_eq!(updated["university"], "Open University");
    assert_eq!(updated["firstName"], body["firstName"]);
    assert_eq!(updated["email"], body["email"]);
}

#[tokio::test]
async fn test_update_missing_user() {
    let app = TestApp::new();

    let response = app
        .server
        .put("/api/users/7")
        .json(&json!({ "firstName": "Ada" }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_email_rejected() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/users")
        .json(&json!({ "firstName": "Ada", "email": "not-an-email" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["message"],
        "email: Invalid email format"
    );
}
