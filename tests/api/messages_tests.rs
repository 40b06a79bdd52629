//! Messaging API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;

use crate::common::TestApp;

fn ids(messages: &Value) -> Vec<i64> {
    messages
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["messageId"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_send_read_then_list() {
    let app = TestApp::new();
    let (match_id, user, _) = app.create_match().await;

    let response = app
        .server
        .post("/api/messages")
        .json(&json!({ "matchId": match_id, "senderId": user, "content": "hi" }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let sent = response.json::<Value>();
    assert_eq!(sent["messageContent"], "hi");
    assert_eq!(sent["isRead"], false);
    assert_eq!(sent["senderId"], user);
    assert!(sent["sentAt"].is_string());

    let message_id = sent["messageId"].as_i64().unwrap();
    let read = app
        .server
        .put(&format!("/api/messages/{}/read", message_id))
        .await;
    read.assert_status_ok();
    assert_eq!(read.json::<Value>()["isRead"], true);

    let listed = app
        .server
        .get(&format!("/api/messages/match/{}", match_id))
        .await
        .json::<Value>();
    assert_eq!(ids(&listed), vec![message_id]);
    assert_eq!(listed[0]["isRead"], true);
}

#[tokio::test]
async fn test_empty_content_is_rejected() {
    let app = TestApp::new();
    let (match_id, user, _) = app.create_match().await;

    let response = app
        .server
        .post("/api/messages")
        .json(&json!({ "matchId": match_id, "senderId": user, "content": "" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["message"],
        "Message content cannot be empty"
    );
}

#[tokio::test]
async fn test_send_to_missing_match() {
    let app = TestApp::new();
    let user = app.create_user().await;

    let response = app
        .server
        .post("/api/messages")
        .json(&json!({ "matchId": 999, "senderId": user, "content": "hi" }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["message"], "Match not found");
}

#[tokio::test]
async fn test_send_from_missing_sender() {
    let app = TestApp::new();
    let (match_id, _, _) = app.create_match().await;

    let response = app
        .server
        .post("/api/messages")
        .json(&json!({ "matchId": match_id, "senderId": 999, "content": "hi" }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["message"], "Sender user not found");
}

#[test_case(json!({ "content": "hi" }), "Match ID is required" ; "missing match id")]
#[test_case(json!({ "matchId": 1, "content": "hi" }), "Sender ID is required" ; "missing sender id")]
#[test_case(json!({ "matchId": 1, "senderId": 1, "content": "   " }), "Message content cannot be empty" ; "blank content")]
#[test_case(json!({ "matchId": 1, "senderId": 1 }), "Message content cannot be empty" ; "absent content")]
#[tokio::test]
async fn test_send_validation(body: Value, expected: &str) {
    let app = TestApp::new();

    let response = app.server.post("/api/messages").json(&body).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["message"], expected);
}

#[test_case(1000, StatusCode::CREATED ; "at the limit")]
#[test_case(1001, StatusCode::BAD_REQUEST ; "one over the limit")]
#[tokio::test]
async fn test_content_length_boundary(length: usize, expected: StatusCode) {
    let app = TestApp::new();
    let (match_id, user, _) = app.create_match().await;

    let response = app
        .server
        .post("/api/messages")
        .json(&json!({ "matchId": match_id, "senderId": user, "content": "a".repeat(length) }))
        .await;
    response.assert_status(expected);
}

#[tokio::test]
async fn test_content_is_trimmed() {
    let app = TestApp::new();
    let (match_id, user, _) = app.create_match().await;

    let sent = app.send(match_id, user, "  hello  ").await;
    assert_eq!(sent["messageContent"], "hello");
}

#[tokio::test]
async fn test_nested_send_body() {
    let app = TestApp::new();
    let (match_id, user, _) = app.create_match().await;

    let response = app
        .server
        .post("/api/messages")
        .json(&json!({
            "match": { "matchId": match_id },
            "sender": { "userId": user, "firstName": "ignored" },
            "messageContent": "nested",
            "isRead": true
        }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let sent = response.json::<Value>();
    assert_eq!(sent["matchId"], match_id);
    assert_eq!(sent["senderId"], user);
    assert_eq!(sent["isRead"], false);
}

#[tokio::test]
async fn test_list_empty_match() {
    let app = TestApp::new();
    let (match_id, _, _) = app.create_match().await;

    let response = app
        .server
        .get(&format!("/api/messages/match/{}", match_id))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_legacy_listing_matches_primary() {
    let app = TestApp::new();
    let (match_id, one, two) = app.create_match().await;
    app.send(match_id, one, "first").await;
    app.send(match_id, two, "second").await;

    let primary = app
        .server
        .get(&format!("/api/messages/match/{}", match_id))
        .await
        .json::<Value>();
    let legacy = app
        .server
        .get(&format!("/api/messages/{}", match_id))
        .await
        .json::<Value>();

    assert_eq!(primary, legacy);
    assert_eq!(primary[0]["messageContent"], "first");
    assert_eq!(primary[1]["messageContent"], "second");
}

#[test_case("/api/messages/match/999" ; "list")]
#[test_case("/api/messages/999" ; "legacy list")]
#[test_case("/api/messages/match/999/latest" ; "latest")]
#[tokio::test]
async fn test_missing_match_reads(path: &str) {
    let app = TestApp::new();

    let response = app.server.get(path).await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["message"], "Match not found");
}

#[tokio::test]
async fn test_latest_message() {
    let app = TestApp::new();
    let (match_id, one, two) = app.create_match().await;

    let empty = app
        .server
        .get(&format!("/api/messages/match/{}/latest", match_id))
        .await;
    empty.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        empty.json::<Value>()["message"],
        "No messages found for this match"
    );

    app.send(match_id, one, "earlier").await;
    let later = app.send(match_id, two, "later").await;

    let latest = app
        .server
        .get(&format!("/api/messages/match/{}/latest", match_id))
        .await;
    latest.assert_status_ok();
    assert_eq!(latest.json::<Value>()["messageId"], later["messageId"]);
}

#[tokio::test]
async fn test_mark_read_twice() {
    let app = TestApp::new();
    let (match_id, user, _) = app.create_match().await;
    let sent = app.send(match_id, user, "hi").await;
    let path = format!("/api/messages/{}/read", sent["messageId"]);

    let first = app.server.put(&path).await.json::<Value>();
    let second = app.server.put(&path).await;
    second.assert_status_ok();
    assert_eq!(second.json::<Value>(), first);
}

#[tokio::test]
async fn test_mark_read_missing_message() {
    let app = TestApp::new();

    let response = app.server.put("/api/messages/999/read").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["message"], "Message not found");
}

#[tokio::test]
async fn test_mark_all_read() {
    let app = TestApp::new();
    let (match_id, one, two) = app.create_match().await;
    let (other_match, other_user, _) = app.create_match().await;
    for (sender, text) in [(one, "a"), (two, "b"), (one, "c")] {
        app.send(match_id, sender, text).await;
    }
    app.send(other_match, other_user, "elsewhere").await;

    let before = app
        .server
        .get(&format!("/api/messages/match/{}", match_id))
        .await
        .json::<Value>();

    let response = app
        .server
        .put(&format!("/api/messages/match/{}/read", match_id))
        .await;
    response.assert_status_ok();
    let marked = response.json::<Value>();
    assert_eq!(ids(&marked), ids(&before));
    assert!(marked
        .as_array()
        .unwrap()
        .iter()
        .all(|m| m["isRead"] == true));

    let after = app
        .server
        .get(&format!("/api/messages/match/{}", match_id))
        .await
        .json::<Value>();
    assert_eq!(after, marked);

    let untouched = app
        .server
        .get(&format!("/api/messages/match/{}", other_match))
        .await
        .json::<Value>();
    assert_eq!(untouched[0]["isRead"], false);
}

#[tokio::test]
async fn test_mark_all_read_empty_and_missing_match() {
    let app = TestApp::new();
    let (match_id, _, _) = app.create_match().await;

    let empty = app
        .server
        .put(&format!("/api/messages/match/{}/read", match_id))
        .await;
    empty.assert_status_ok();
    assert_eq!(empty.json::<Value>(), json!([]));

    let missing = app.server.put("/api/messages/match/999/read").await;
    missing.assert_status(StatusCode::NOT_FOUND);
}

#[test_case("/api/messages/match/abc" ; "list")]
#[test_case("/api/messages/abc" ; "legacy list")]
#[test_case("/api/messages/match/abc/latest" ; "latest")]
#[tokio::test]
async fn test_non_numeric_match_id(path: &str) {
    let app = TestApp::new();

    let response = app.server.get(path).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["message"], "Invalid match ID");
}

#[test_case(r#"{"matchId": "x", "senderId": 1, "content": "hi"}"# ; "wrong field type")]
#[test_case(r#"{"matchId": 1, "senderId": 1, "content": "#; "truncated json")]
#[tokio::test]
async fn test_malformed_send_body_is_bad_request(body: &str) {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/messages")
        .content_type("application/json")
        .bytes(body.as_bytes().to_vec().into())
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let error = response.json::<Value>();
    assert_eq!(error["code"], 10002);
    assert!(error["message"].is_string());
}

#[test_case(500, StatusCode::CREATED ; "emoji at the limit")]
#[test_case(501, StatusCode::BAD_REQUEST ; "emoji over the limit")]
#[tokio::test]
async fn test_emoji_count_double_toward_limit(emoji: usize, expected: StatusCode) {
    let app = TestApp::new();
    let (match_id, user, _) = app.create_match().await;

    let response = app
        .server
        .post("/api/messages")
        .json(&json!({ "matchId": match_id, "senderId": user, "content": "😀".repeat(emoji) }))
        .await;
    response.assert_status(expected);
}
