//! Language API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::TestApp;

#[tokio::test]
async fn test_add_list_delete_language() {
    let app = TestApp::new();
    let ada = app.create_user().await;
    let bob = app.create_user().await;

    let response = app
        .server
        .post("/api/languages")
        .json(&json!({ "userId": ada, "languageName": "Rust", "proficiencyLevel": "fluent" }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let rust = response.json::<Value>();

    app.server
        .post("/api/languages")
        .json(&json!({ "user": { "userId": bob }, "languageName": "Go" }))
        .await
        .assert_status(StatusCode::CREATED);

    let adas = app
        .server
        .get(&format!("/api/languages/user/{}", ada))
        .await
        .json::<Value>();
    assert_eq!(adas, json!([rust]));
    assert_eq!(
        app.server.get("/api/languages").await.json::<Value>().as_array().unwrap().len(),
        2
    );

    let path = format!("/api/languages/{}", rust["languageId"]);
    app.server
        .delete(&path)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let again = app.server.delete(&path).await;
    again.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(again.json::<Value>()["message"], "Language not found");
}

#[tokio::test]
async fn test_language_requires_name_and_user() {
    let app = TestApp::new();
    let user = app.create_user().await;

    app.server
        .post("/api/languages")
        .json(&json!({ "userId": user, "languageName": "" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let missing_user = app
        .server
        .post("/api/languages")
        .json(&json!({ "userId": 999, "languageName": "Rust" }))
        .await;
    missing_user.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(missing_user.json::<Value>()["message"], "User not found");
}
