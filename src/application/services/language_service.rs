//! Language Service
//!
//! Manages the languages and skills users list on their profile.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{NewUserLanguage, UserLanguage, UserLanguageRepository, UserRepository};
use crate::shared::error::AppError;

/// Language service trait
#[async_trait]
pub trait LanguageService: Send + Sync {
    async fn list_languages(&self) -> Result<Vec<UserLanguage>, LanguageError>;

    /// Languages of one user. An unknown user simply has none.
    async fn list_user_languages(&self, user_id: i64) -> Result<Vec<UserLanguage>, LanguageError>;

    async fn add_language(&self, language: NewUserLanguage) -> Result<UserLanguage, LanguageError>;

    async fn delete_language(&self, language_id: i64) -> Result<(), LanguageError>;
}

/// Language service errors
#[derive(Debug, thiserror::Error)]
pub enum LanguageError {
    #[error("Language not found")]
    NotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AppError> for LanguageError {
    fn from(e: AppError) -> Self {
        LanguageError::Internal(e.to_string())
    }
}

/// LanguageService implementation
pub struct LanguageServiceImpl {
    language_repo: Arc<dyn UserLanguageRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl LanguageServiceImpl {
    pub fn new(
        language_repo: Arc<dyn UserLanguageRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            language_repo,
            user_repo,
        }
    }
}

#[async_trait]
impl LanguageService for LanguageServiceImpl {
    async fn list_languages(&self) -> Result<Vec<UserLanguage>, LanguageError> {
        Ok(self.language_repo.find_all().await?)
    }

    async fn list_user_languages(&self, user_id: i64) -> Result<Vec<UserLanguage>, LanguageError> {
        Ok(self.language_repo.find_by_user(user_id).await?)
    }

    async fn add_language(&self, language: NewUserLanguage) -> Result<UserLanguage, LanguageError> {
        if !self.user_repo.exists_by_id(language.user_id).await? {
            return Err(LanguageError::UserNotFound);
        }

        Ok(self.language_repo.create(language).await?)
    }

    async fn delete_language(&self, language_id: i64) -> Result<(), LanguageError> {
        if !self.language_repo.delete(language_id).await? {
            return Err(LanguageError::NotFound);
        }

        tracing::debug!(language_id, "Language deleted");
        Ok(())
    }
}
