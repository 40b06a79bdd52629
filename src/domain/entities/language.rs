//! UserLanguage entity and repository trait.
//!
//! Maps to the `user_languages` table in the database schema.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A language (or skill) a user lists, with an optional proficiency level.
///
/// Maps to the `user_languages` table:
/// - language_id: BIGSERIAL PRIMARY KEY
/// - user_id: BIGINT NOT NULL REFERENCES users(user_id)
/// - language_name: VARCHAR(100) NOT NULL
/// - proficiency_level: VARCHAR(50) NULL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserLanguage {
    /// Store-assigned ID (primary key)
    pub id: i64,

    pub user_id: i64,

    pub language_name: String,

    pub proficiency_level: Option<String>,
}

/// A language entry that is not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUserLanguage {
    pub user_id: i64,
    pub language_name: String,
    pub proficiency_level: Option<String>,
}

/// Repository trait for UserLanguage data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserLanguageRepository: Send + Sync {
    /// List every language entry, ordered by ID.
    async fn find_all(&self) -> Result<Vec<UserLanguage>, AppError>;

    /// List the language entries of one user.
    async fn find_by_user(&self, user_id: i64) -> Result<Vec<UserLanguage>, AppError>;

    /// Insert a new entry and return it with its assigned ID.
    async fn create(&self, language: NewUserLanguage) -> Result<UserLanguage, AppError>;

    /// Delete an entry. Returns `false` when nothing was deleted.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
