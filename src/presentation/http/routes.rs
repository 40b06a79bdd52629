//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    middleware,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Router,
};

use super::handlers;
use crate::infrastructure::metrics;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        .route("/metrics", get(metrics_handler))
        .layer(middleware::from_fn(metrics::track_http_metrics))
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics::gather_metrics(),
    )
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/messages", message_routes())
        .nest("/users", user_routes())
        .nest("/profiles", profile_routes())
        .nest("/languages", language_routes())
        .nest("/matches", match_routes())
}

/// Message routes. `/{id}` doubles as the legacy per-match listing.
fn message_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::message::send_message))
        .route("/match/{match_id}", get(handlers::message::get_messages_by_match))
        .route(
            "/match/{match_id}/latest",
            get(handlers::message::get_latest_message),
        )
        .route("/match/{match_id}/read", put(handlers::message::mark_all_read))
        .route("/{id}", get(handlers::message::get_messages_legacy))
        .route("/{id}/read", put(handlers::message::mark_message_read))
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::user::list_users).post(handlers::user::create_user),
        )
        .route(
            "/{user_id}",
            get(handlers::user::get_user).put(handlers::user::update_user),
        )
}

fn profile_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::profile::list_profiles).post(handlers::profile::create_profile),
        )
        .route(
            "/{profile_id}",
            get(handlers::profile::get_profile).put(handlers::profile::replace_profile),
        )
}

fn language_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::language::list_languages).post(handlers::language::add_language),
        )
        .route(
            "/user/{user_id}",
            get(handlers::language::list_user_languages),
        )
        .route("/{language_id}", delete(handlers::language::delete_language))
}

fn match_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::matches::list_matches).post(handlers::matches::create_match),
        )
        .route("/{match_id}", get(handlers::matches::get_match))
}
