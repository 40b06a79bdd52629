//! Common Test Utilities
//!
//! A full router over a fresh in-memory store, plus fixtures.

use axum_test::TestServer;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use serde_json::{json, Value};

use skillswap_server::config::Settings;
use skillswap_server::infrastructure::Repositories;
use skillswap_server::startup::{build_router, AppState};

/// Test application
pub struct TestApp {
    pub server: TestServer,
}

impl TestApp {
    /// Spawn the router on an empty in-memory store
    pub fn new() -> Self {
        let settings = Settings::defaults().unwrap();
        let state = AppState::new(Repositories::in_memory(), settings);
        let server = TestServer::new(build_router(state)).unwrap();

        Self { server }
    }

    /// Create a user with generated name and email, returning its ID
    pub async fn create_user(&self) -> i64 {
        let response = self.server.post("/api/users").json(&fake_user()).await;
        response.json::<Value>()["userId"].as_i64().unwrap()
    }

    /// Create two users and a match between them.
    /// Returns `(match_id, user_one_id, user_two_id)`.
    pub async fn create_match(&self) -> (i64, i64, i64) {
        let one = self.create_user().await;
        let two = self.create_user().await;
        let response = self
            .server
            .post("/api/matches")
            .json(&json!({ "userOneId": one, "userTwoId": two }))
            .await;

        (response.json::<Value>()["matchId"].as_i64().unwrap(), one, two)
    }

    /// Send a message and return the response body
    pub async fn send(&self, match_id: i64, sender_id: i64, content: &str) -> Value {
        self.server
            .post("/api/messages")
            .json(&json!({ "matchId": match_id, "senderId": sender_id, "content": content }))
            .await
            .json::<Value>()
    }
}

/// A user body with generated name and email
pub fn fake_user() -> Value {
    let first: String = FirstName().fake();
    let last: String = LastName().fake();
    let email: String = SafeEmail().fake();

    json!({
        "firstName": first,
        "lastName": last,
        "university": "State University",
        "email": email,
    })
}
