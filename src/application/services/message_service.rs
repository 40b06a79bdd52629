//! Message Service
//!
//! Handles message operations within a match: send, list, latest lookup and
//! read-state tracking.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{
    content_length, trim_content, MatchRepository, Message, MessageRepository, NewMessage,
    UserRepository, MAX_MESSAGE_LENGTH,
};
use crate::shared::error::AppError;

/// Message service trait
#[async_trait]
pub trait MessageService: Send + Sync {
    /// All messages of a match, oldest first
    async fn list_by_match(&self, match_id: i64) -> Result<Vec<MessageDto>, MessageError>;

    /// The most recent message of a match
    async fn latest_by_match(&self, match_id: i64) -> Result<MessageDto, MessageError>;

    /// Validate and store a new message
    async fn send_message(&self, request: SendMessageDto) -> Result<MessageDto, MessageError>;

    /// Flag a single message as read
    async fn mark_read(&self, message_id: i64) -> Result<ReadUpdate<MessageDto>, MessageError>;

    /// Flag every message of a match as read
    async fn mark_all_read(
        &self,
        match_id: i64,
    ) -> Result<ReadUpdate<Vec<MessageDto>>, MessageError>;
}

/// Result of a read-flag update: the stored state plus how many messages
/// were unread before the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadUpdate<T> {
    pub value: T,
    pub newly_read: usize,
}

/// Send message request. Every field is optional so that each missing piece
/// is reported with its own error.
#[derive(Debug, Clone, Default)]
pub struct SendMessageDto {
    pub match_id: Option<i64>,
    pub sender_id: Option<i64>,
    pub content: Option<String>,
}

/// Message data transfer object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDto {
    pub id: i64,
    pub match_id: i64,
    pub sender_id: i64,
    pub content: String,
    pub sent_at: DateTime<Utc>,
    pub is_read: bool,
}

impl From<Message> for MessageDto {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            match_id: message.match_id,
            sender_id: message.sender_id,
            content: message.content,
            sent_at: message.sent_at,
            is_read: message.is_read,
        }
    }
}

/// Message service errors
#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    #[error("Match ID is required")]
    MatchIdRequired,

    #[error("Sender ID is required")]
    SenderIdRequired,

    #[error("Message content cannot be empty")]
    EmptyContent,

    #[error("Message is too long")]
    ContentTooLong,

    #[error("Match not found")]
    MatchNotFound,

    #[error("Sender user not found")]
    SenderNotFound,

    #[error("Message not found")]
    NotFound,

    #[error("No messages found for this match")]
    NoMessages,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl MessageError {
    /// Whether the error was caused by the shape of the request.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MatchIdRequired | Self::SenderIdRequired | Self::EmptyContent | Self::ContentTooLong
        )
    }
}

impl From<AppError> for MessageError {
    fn from(e: AppError) -> Self {
        MessageError::Internal(e.to_string())
    }
}

/// A send request that passed the shape checks.
#[derive(Debug, PartialEq, Eq)]
struct ValidatedMessage {
    match_id: i64,
    sender_id: i64,
    content: String,
}

/// Check presence, blankness and length in that order. Length is measured
/// on the raw input, the stored content is trimmed.
fn validate_send(request: SendMessageDto) -> Result<ValidatedMessage, MessageError> {
    let match_id = request.match_id.ok_or(MessageError::MatchIdRequired)?;
    let sender_id = request.sender_id.ok_or(MessageError::SenderIdRequired)?;

    let content = request.content.unwrap_or_default();
    let trimmed = trim_content(&content);
    if trimmed.is_empty() {
        return Err(MessageError::EmptyContent);
    }

    if content_length(&content) > MAX_MESSAGE_LENGTH {
        return Err(MessageError::ContentTooLong);
    }

    Ok(ValidatedMessage {
        match_id,
        sender_id,
        content: trimmed.to_string(),
    })
}

/// MessageService implementation
pub struct MessageServiceImpl {
    message_repo: Arc<dyn MessageRepository>,
    match_repo: Arc<dyn MatchRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl MessageServiceImpl {
    pub fn new(
        message_repo: Arc<dyn MessageRepository>,
        match_repo: Arc<dyn MatchRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            message_repo,
            match_repo,
            user_repo,
        }
    }

    async fn ensure_match_exists(&self, match_id: i64) -> Result<(), MessageError> {
        if !self.match_repo.exists_by_id(match_id).await? {
            return Err(MessageError::MatchNotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl MessageService for MessageServiceImpl {
    async fn list_by_match(&self, match_id: i64) -> Result<Vec<MessageDto>, MessageError> {
        self.ensure_match_exists(match_id).await?;

        let messages = self.message_repo.find_by_match_ordered(match_id).await?;

        Ok(messages.into_iter().map(MessageDto::from).collect())
    }

    async fn latest_by_match(&self, match_id: i64) -> Result<MessageDto, MessageError> {
        self.ensure_match_exists(match_id).await?;

        let message = self
            .message_repo
            .find_latest_by_match(match_id)
            .await?
            .ok_or(MessageError::NoMessages)?;

        Ok(MessageDto::from(message))
    }

    async fn send_message(&self, request: SendMessageDto) -> Result<MessageDto, MessageError> {
        let valid = validate_send(request)?;

        // Only the ids are taken from the caller; both entities are re-resolved.
        let chat = self
            .match_repo
            .find_by_id(valid.match_id)
            .await?
            .ok_or(MessageError::MatchNotFound)?;

        let sender = self
            .user_repo
            .find_by_id(valid.sender_id)
            .await?
            .ok_or(MessageError::SenderNotFound)?;

        let created = self
            .message_repo
            .create(NewMessage {
                match_id: chat.id,
                sender_id: sender.id,
                content: valid.content,
                sent_at: Utc::now(),
            })
            .await?;

        tracing::info!(
            message_id = created.id,
            match_id = created.match_id,
            sender_id = created.sender_id,
            "Message sent"
        );

        Ok(MessageDto::from(created))
    }

    async fn mark_read(&self, message_id: i64) -> Result<ReadUpdate<MessageDto>, MessageError> {
        let mut message = self
            .message_repo
            .find_by_id(message_id)
            .await?
            .ok_or(MessageError::NotFound)?;

        let changed = message.mark_read();

        let updated = self.message_repo.update(&message).await?;

        Ok(ReadUpdate {
            value: MessageDto::from(updated),
            newly_read: usize::from(changed),
        })
    }

    async fn mark_all_read(
        &self,
        match_id: i64,
    ) -> Result<ReadUpdate<Vec<MessageDto>>, MessageError> {
        self.ensure_match_exists(match_id).await?;

        let mut messages = self.message_repo.find_by_match_ordered(match_id).await?;
        if messages.is_empty() {
            return Ok(ReadUpdate {
                value: Vec::new(),
                newly_read: 0,
            });
        }

        let changed = messages
            .iter_mut()
            .map(Message::mark_read)
            .filter(|changed| *changed)
            .count();

        let saved = self.message_repo.save_batch(messages).await?;

        tracing::debug!(match_id, changed, total = saved.len(), "Marked match messages as read");

        Ok(ReadUpdate {
            value: saved.into_iter().map(MessageDto::from).collect(),
            newly_read: changed,
        })
    }
}
