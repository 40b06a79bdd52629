//! Message Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::parse_id;
use crate::application::dto::request::SendMessageRequest;
use crate::application::dto::response::MessageResponse;
use crate::application::services::{MessageDto, MessageError};
use crate::infrastructure::metrics;
use crate::presentation::http::extractors::JsonBody;
use crate::shared::error::AppError;
use crate::startup::AppState;

impl From<MessageError> for AppError {
    fn from(e: MessageError) -> Self {
        match e {
            e if e.is_validation() => AppError::BadRequest(e.to_string()),
            MessageError::Internal(msg) => AppError::Internal(msg),
            e => AppError::NotFound(e.to_string()),
        }
    }
}

fn to_responses(messages: Vec<MessageDto>) -> Vec<MessageResponse> {
    messages.into_iter().map(MessageResponse::from).collect()
}

/// Get every message of a match in send order
pub async fn get_messages_by_match(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
) -> Result<Json<Vec<MessageResponse>>, AppError> {
    let match_id = parse_id(&match_id, "match")?;
    let messages = state.messages.list_by_match(match_id).await?;

    Ok(Json(to_responses(messages)))
}

/// `GET /api/messages/{matchId}`, kept for older clients
pub async fn get_messages_legacy(
    state: State<AppState>,
    match_id: Path<String>,
) -> Result<Json<Vec<MessageResponse>>, AppError> {
    get_messages_by_match(state, match_id).await
}

/// Get the most recent message of a match
pub async fn get_latest_message(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let match_id = parse_id(&match_id, "match")?;
    let message = state.messages.latest_by_match(match_id).await?;

    Ok(Json(MessageResponse::from(message)))
}

/// Send a message within a match
pub async fn send_message(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<SendMessageRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let message = state.messages.send_message(body.into()).await?;
    metrics::record_message_sent();

    Ok((StatusCode::CREATED, Json(MessageResponse::from(message))))
}

/// Mark a single message as read
pub async fn mark_message_read(
    State(state): State<AppState>,
    Path(message_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let message_id = parse_id(&message_id, "message")?;
    let update = state.messages.mark_read(message_id).await?;
    metrics::record_messages_marked_read("single", update.newly_read);

    Ok(Json(MessageResponse::from(update.value)))
}

/// Mark every message of a match as read
pub async fn mark_all_read(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
) -> Result<Json<Vec<MessageResponse>>, AppError> {
    let match_id = parse_id(&match_id, "match")?;
    let update = state.messages.mark_all_read(match_id).await?;
    metrics::record_messages_marked_read("match", update.newly_read);

    Ok(Json(to_responses(update.value)))
}
