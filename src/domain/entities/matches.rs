//! Match entity and repository trait.
//!
//! Maps to the `matches` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A pairing between two users who can exchange messages.
///
/// Maps to the `matches` table:
/// - match_id: BIGSERIAL PRIMARY KEY
/// - user_one_id: BIGINT NOT NULL REFERENCES users(user_id)
/// - user_two_id: BIGINT NOT NULL REFERENCES users(user_id)
/// - matched_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// Store-assigned ID (primary key)
    pub id: i64,

    pub user_one_id: i64,

    pub user_two_id: i64,

    /// When the pairing was created
    pub matched_at: DateTime<Utc>,
}

/// A match that is not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMatch {
    pub user_one_id: i64,
    pub user_two_id: i64,
    pub matched_at: DateTime<Utc>,
}

/// Repository trait for Match data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MatchRepository: Send + Sync {
    /// List every match, ordered by ID.
    async fn find_all(&self) -> Result<Vec<Match>, AppError>;

    /// Find a match by ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Match>, AppError>;

    /// Check whether a match with this ID exists.
    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// Insert a new match and return it with its assigned ID.
    async fn create(&self, new_match: NewMatch) -> Result<Match, AppError>;
}
