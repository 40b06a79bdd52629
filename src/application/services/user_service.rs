//! User Service
//!
//! Handles user management operations.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{NewUser, User, UserPatch, UserRepository};
use crate::shared::error::AppError;

/// User service trait
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all users
    async fn list_users(&self) -> Result<Vec<User>, UserError>;

    /// Register a new user
    async fn create_user(&self, user: NewUser) -> Result<User, UserError>;

    /// Get user by ID
    async fn get_user(&self, user_id: i64) -> Result<User, UserError>;

    /// Apply a partial update to a user
    async fn update_user(&self, user_id: i64, patch: UserPatch) -> Result<User, UserError>;
}

/// User service errors
#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("User not found for this id :: {0}")]
    NotFound(i64),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AppError> for UserError {
    fn from(e: AppError) -> Self {
        UserError::Internal(e.to_string())
    }
}

/// UserService implementation
pub struct UserServiceImpl {
    user_repo: Arc<dyn UserRepository>,
}

impl UserServiceImpl {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        Ok(self.user_repo.find_all().await?)
    }

    async fn create_user(&self, user: NewUser) -> Result<User, UserError> {
        let created = self.user_repo.create(user).await?;
        tracing::info!(user_id = created.id, "User created");
        Ok(created)
    }

    async fn get_user(&self, user_id: i64) -> Result<User, UserError> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(UserError::NotFound(user_id))
    }

    async fn update_user(&self, user_id: i64, patch: UserPatch) -> Result<User, UserError> {
        let mut user = self.get_user(user_id).await?;

        user.apply(patch);

        Ok(self.user_repo.update(&user).await?)
    }
}
