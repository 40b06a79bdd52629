//! Message entity and repository trait.
//!
//! Maps to the `messages` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Maximum message length, measured with [`content_length`] on the
/// untrimmed input.
pub const MAX_MESSAGE_LENGTH: usize = 1000;

/// Length of message content in UTF-16 code units, so a character outside
/// the Basic Multilingual Plane (most emoji) counts as two.
pub fn content_length(content: &str) -> usize {
    content.encode_utf16().count()
}

/// Strip leading and trailing spaces and ASCII control characters
/// (everything up to U+0020). Other Unicode whitespace is kept.
pub fn trim_content(content: &str) -> &str {
    content.trim_matches(|c: char| c <= ' ')
}

/// Represents a message exchanged within a match.
///
/// Maps to the `messages` table:
/// - message_id: BIGSERIAL PRIMARY KEY
/// - match_id: BIGINT NOT NULL REFERENCES matches(match_id)
/// - sender_id: BIGINT NOT NULL REFERENCES users(user_id)
/// - message_content: VARCHAR(1000) NOT NULL
/// - sent_at: TIMESTAMPTZ NOT NULL
/// - is_read: BOOLEAN NOT NULL DEFAULT FALSE
///
/// Rows are only ever inserted or have `is_read` flipped; they are never
/// deleted or reordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Store-assigned ID (primary key)
    pub id: i64,

    /// Match the message belongs to
    pub match_id: i64,

    /// Author user ID
    pub sender_id: i64,

    /// Trimmed message content (1-1000 characters)
    pub content: String,

    /// Server-assigned send timestamp
    pub sent_at: DateTime<Utc>,

    /// Whether the recipient has read the message
    pub is_read: bool,
}

impl Message {
    /// Flag the message as read. Returns `true` if the flag changed.
    pub fn mark_read(&mut self) -> bool {
        let changed = !self.is_read;
        self.is_read = true;
        changed
    }
}

/// A message that is not yet persisted. Always stored unread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub match_id: i64,
    pub sender_id: i64,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

/// Repository trait for Message data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Find a message by ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Message>, AppError>;

    /// All messages of a match, ascending by send time with ID as tie-break.
    async fn find_by_match_ordered(&self, match_id: i64) -> Result<Vec<Message>, AppError>;

    /// The most recent message of a match, if any.
    async fn find_latest_by_match(&self, match_id: i64) -> Result<Option<Message>, AppError>;

    /// Insert a new message and return it with its assigned ID.
    async fn create(&self, message: NewMessage) -> Result<Message, AppError>;

    /// Persist the mutable state of an existing message.
    async fn update(&self, message: &Message) -> Result<Message, AppError>;

    /// Persist several messages at once. Either all rows are written or none.
    async fn save_batch(&self, messages: Vec<Message>) -> Result<Vec<Message>, AppError>;
}
