//! Profile Service

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{NewProfile, Profile, ProfileAttributes, ProfileRepository, UserRepository};
use crate::shared::error::AppError;

/// Profile service trait
#[async_trait]
pub trait ProfileService: Send + Sync {
    async fn list_profiles(&self) -> Result<Vec<Profile>, ProfileError>;

    async fn create_profile(&self, profile: NewProfile) -> Result<Profile, ProfileError>;

    async fn get_profile(&self, profile_id: i64) -> Result<Profile, ProfileError>;

    /// Replace every attribute of a profile. Absent attributes are cleared.
    async fn replace_profile(
        &self,
        profile_id: i64,
        attributes: ProfileAttributes,
    ) -> Result<Profile, ProfileError>;
}

/// Profile service errors
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("Profile not found")]
    NotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AppError> for ProfileError {
    fn from(e: AppError) -> Self {
        ProfileError::Internal(e.to_string())
    }
}

/// ProfileService implementation
pub struct ProfileServiceImpl {
    profile_repo: Arc<dyn ProfileRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl ProfileServiceImpl {
    pub fn new(profile_repo: Arc<dyn ProfileRepository>, user_repo: Arc<dyn UserRepository>) -> Self {
        Self {
            profile_repo,
            user_repo,
        }
    }
}

#[async_trait]
impl ProfileService for ProfileServiceImpl {
    async fn list_profiles(&self) -> Result<Vec<Profile>, ProfileError> {
        Ok(self.profile_repo.find_all().await?)
    }

    async fn create_profile(&self, profile: NewProfile) -> Result<Profile, ProfileError> {
        if !self.user_repo.exists_by_id(profile.user_id).await? {
            return Err(ProfileError::UserNotFound);
        }

        Ok(self.profile_repo.create(profile).await?)
    }

    async fn get_profile(&self, profile_id: i64) -> Result<Profile, ProfileError> {
        self.profile_repo
            .find_by_id(profile_id)
            .await?
            .ok_or(ProfileError::NotFound)
    }

    async fn replace_profile(
        &self,
        profile_id: i64,
        attributes: ProfileAttributes,
    ) -> Result<Profile, ProfileError> {
        let mut profile = self.get_profile(profile_id).await?;
        profile.attributes = attributes;

        Ok(self.profile_repo.update(&profile).await?)
    }
}
