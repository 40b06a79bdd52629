//! Message Repository Implementation
//!
//! PostgreSQL implementation of message storage: ordered retrieval per match,
//! latest-message lookup and transactional batch updates of the read flag.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{Message, MessageRepository, NewMessage};
use crate::shared::error::AppError;

/// PostgreSQL message repository implementation.
#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    /// Creates a new PgMessageRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for message queries.
#[derive(Debug, sqlx::FromRow)]
struct MessageRow {
    message_id: i64,
    match_id: i64,
    sender_id: i64,
    message_content: String,
    sent_at: DateTime<Utc>,
    is_read: bool,
}

impl MessageRow {
    /// Converts database row to domain Message entity.
    fn into_message(self) -> Message {
        Message {
            id: self.message_id,
            match_id: self.match_id,
            sender_id: self.sender_id,
            content: self.message_content,
            sent_at: self.sent_at,
            is_read: self.is_read,
        }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    /// Find a message by its ID.
    ///
    /// Returns None if the message does not exist.
    async fn find_by_id(&self, id: i64) -> Result<Option<Message>, AppError> {
        let row = sqlx::query_as::<_, MessageRow>(
            r#"
            SELECT message_id, match_id, sender_id, message_content, sent_at, is_read
            FROM messages
            WHERE message_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_message()))
    }

    /// All messages of a match, oldest first.
    ///
    /// `message_id` breaks ties between equal timestamps so the result follows
    /// insertion order.
    async fn find_by_match_ordered(&self, match_id: i64) -> Result<Vec<Message>, AppError> {
        let rows = sqlx::query_as::<_, MessageRow>(
            r#"
            SELECT message_id, match_id, sender_id, message_content, sent_at, is_read
            FROM messages
            WHERE match_id = $1
            ORDER BY sent_at ASC, message_id ASC
            "#,
        )
        .bind(match_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_message()).collect())
    }

    /// The most recent message of a match.
    async fn find_latest_by_match(&self, match_id: i64) -> Result<Option<Message>, AppError> {
        let row = sqlx::query_as::<_, MessageRow>(
            r#"
            SELECT message_id, match_id, sender_id, message_content, sent_at, is_read
            FROM messages
            WHERE match_id = $1
            ORDER BY sent_at DESC, message_id DESC
            LIMIT 1
            "#,
        )
        .bind(match_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_message()))
    }

    /// Insert a new, unread message.
    async fn create(&self, message: NewMessage) -> Result<Message, AppError> {
        let row = sqlx::query_as::<_, MessageRow>(
            r#"
            INSERT INTO messages (match_id, sender_id, message_content, sent_at, is_read)
            VALUES ($1, $2, $3, $4, FALSE)
            RETURNING message_id, match_id, sender_id, message_content, sent_at, is_read
            "#,
        )
        .bind(message.match_id)
        .bind(message.sender_id)
        .bind(&message.content)
        .bind(message.sent_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_message())
    }

    /// Update the read flag. Content and timestamp are immutable.
    async fn update(&self, message: &Message) -> Result<Message, AppError> {
        let row = sqlx::query_as::<_, MessageRow>(
            r#"
            UPDATE messages
            SET is_read = $2
            WHERE message_id = $1
            RETURNING message_id, match_id, sender_id, message_content, sent_at, is_read
            "#,
        )
        .bind(message.id)
        .bind(message.is_read)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_message())
            .ok_or_else(|| AppError::NotFound(format!("Message {} not found", message.id)))
    }

    /// Update the read flag of several messages in one transaction.
    ///
    /// A missing row aborts the batch and rolls back every earlier update.
    async fn save_batch(&self, messages: Vec<Message>) -> Result<Vec<Message>, AppError> {
        if messages.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin().await?;
        let mut saved = Vec::with_capacity(messages.len());

        for message in &messages {
            let row = sqlx::query_as::<_, MessageRow>(
                r#"
                UPDATE messages
                SET is_read = $2
                WHERE message_id = $1
                RETURNING message_id, match_id, sender_id, message_content, sent_at, is_read
                "#,
            )
            .bind(message.id)
            .bind(message.is_read)
            .fetch_optional(&mut *tx)
            .await?;

            match row {
                Some(row) => saved.push(row.into_message()),
                // Transaction is rolled back when dropped
                None => return Err(AppError::NotFound(format!("Message {} not found", message.id))),
            }
        }

        tx.commit().await?;

        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_conversion() {
        let now = Utc::now();
        let row = MessageRow {
            message_id: 3,
            match_id: 2,
            sender_id: 1,
            message_content: "hi".into(),
            sent_at: now,
            is_read: true,
        };

        let message = row.into_message();
        assert_eq!(message.id, 3);
        assert_eq!(message.match_id, 2);
        assert_eq!(message.sender_id, 1);
        assert_eq!(message.content, "hi");
        assert_eq!(message.sent_at, now);
        assert!(message.is_read);
    }
}
