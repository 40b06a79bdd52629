//! Match Service
//!
//! Creates and looks up pairings between users.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{Match, MatchRepository, NewMatch, UserRepository};
use crate::shared::error::AppError;

/// Match service trait
#[async_trait]
pub trait MatchService: Send + Sync {
    /// List all matches
    async fn list_matches(&self) -> Result<Vec<Match>, MatchError>;

    /// Get a match by ID
    async fn get_match(&self, match_id: i64) -> Result<Match, MatchError>;

    /// Pair two existing users
    async fn create_match(&self, user_one_id: i64, user_two_id: i64) -> Result<Match, MatchError>;
}

/// Match service errors
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("Match not found")]
    NotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("A user cannot be matched with themselves")]
    SelfMatch,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AppError> for MatchError {
    fn from(e: AppError) -> Self {
        MatchError::Internal(e.to_string())
    }
}

/// MatchService implementation
pub struct MatchServiceImpl {
    match_repo: Arc<dyn MatchRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl MatchServiceImpl {
    pub fn new(match_repo: Arc<dyn MatchRepository>, user_repo: Arc<dyn UserRepository>) -> Self {
        Self {
            match_repo,
            user_repo,
        }
    }
}

#[async_trait]
impl MatchService for MatchServiceImpl {
    async fn list_matches(&self) -> Result<Vec<Match>, MatchError> {
        Ok(self.match_repo.find_all().await?)
    }

    async fn get_match(&self, match_id: i64) -> Result<Match, MatchError> {
        self.match_repo
            .find_by_id(match_id)
            .await?
            .ok_or(MatchError::NotFound)
    }

    async fn create_match(&self, user_one_id: i64, user_two_id: i64) -> Result<Match, MatchError> {
        if user_one_id == user_two_id {
            return Err(MatchError::SelfMatch);
        }

        for user_id in [user_one_id, user_two_id] {
            if !self.user_repo.exists_by_id(user_id).await? {
                return Err(MatchError::UserNotFound);
            }
        }

        let created = self
            .match_repo
            .create(NewMatch {
                user_one_id,
                user_two_id,
                matched_at: Utc::now(),
            })
            .await?;

        tracing::info!(match_id = created.id, user_one_id, user_two_id, "Match created");

        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MockMatchRepository, MockUserRepository, NewUser};
    use crate::infrastructure::memory::MemoryStore;

    #[tokio::test]
    async fn test_self_match_rejected_before_lookup() {
        let service = MatchServiceImpl::new(
            Arc::new(MockMatchRepository::new()),
            Arc::new(MockUserRepository::new()),
        );
        assert!(matches!(
            service.create_match(3, 3).await,
            Err(MatchError::SelfMatch)
        ));
    }

    #[tokio::test]
    async fn test_create_requires_both_users() {
        let store = Arc::new(MemoryStore::new());
        let user = UserRepository::create(store.as_ref(), NewUser::default()).await.unwrap();
        let service = MatchServiceImpl::new(store.clone(), store.clone());

        assert!(matches!(
            service.create_match(user.id, user.id + 1).await,
            Err(MatchError::UserNotFound)
        ));
        assert!(service.list_matches().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let store = Arc::new(MemoryStore::new());
        let one = UserRepository::create(store.as_ref(), NewUser::default()).await.unwrap();
        let two = UserRepository::create(store.as_ref(), NewUser::default()).await.unwrap();
        let service = MatchServiceImpl::new(store.clone(), store.clone());

        let created = service.create_match(one.id, two.id).await.unwrap();
        assert_eq!(service.get_match(created.id).await.unwrap(), created);
        assert!(matches!(
            service.get_match(created.id + 1).await,
            Err(MatchError::NotFound)
        ));
    }
}
