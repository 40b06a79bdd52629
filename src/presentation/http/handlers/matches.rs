//! Match Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::parse_id;
use crate::application::dto::request::CreateMatchRequest;
use crate::application::dto::response::MatchResponse;
use crate::application::services::MatchError;
use crate::presentation::http::extractors::JsonBody;
use crate::shared::error::AppError;
use crate::startup::AppState;

impl From<MatchError> for AppError {
    fn from(e: MatchError) -> Self {
        match e {
            MatchError::NotFound | MatchError::UserNotFound => AppError::NotFound(e.to_string()),
            MatchError::SelfMatch => AppError::BadRequest(e.to_string()),
            MatchError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

pub async fn list_matches(
    State(state): State<AppState>,
) -> Result<Json<Vec<MatchResponse>>, AppError> {
    let matches = state.matches.list_matches().await?;
    Ok(Json(matches.into_iter().map(MatchResponse::from).collect()))
}

pub async fn get_match(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
) -> Result<Json<MatchResponse>, AppError> {
    let match_id = parse_id(&match_id, "match")?;
    let m = state.matches.get_match(match_id).await?;

    Ok(Json(MatchResponse::from(m)))
}

/// Pair two existing users
pub async fn create_match(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateMatchRequest>,
) -> Result<(StatusCode, Json<MatchResponse>), AppError> {
    let m = state
        .matches
        .create_match(body.user_one_id, body.user_two_id)
        .await?;
    tracing::info!(match_id = m.id, "Match created");

    Ok((StatusCode::CREATED, Json(MatchResponse::from(m))))
}
