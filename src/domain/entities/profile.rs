//! Profile entity and repository trait.
//!
//! Maps to the `profiles` table in the database schema.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Free-form attributes a user shows to potential matches.
///
/// Maps to the `profiles` table:
/// - profile_id: BIGSERIAL PRIMARY KEY
/// - user_id: BIGINT NOT NULL REFERENCES users(user_id)
/// - every attribute column: TEXT NULL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Store-assigned ID (primary key)
    pub id: i64,

    /// Owning user
    pub user_id: i64,

    pub attributes: ProfileAttributes,
}

/// The editable part of a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileAttributes {
    pub bio: Option<String>,
    pub major: Option<String>,
    pub year: Option<String>,
    pub location: Option<String>,
    pub career_goals: Option<String>,
    pub availability: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub portfolio: Option<String>,
    pub career: Option<String>,
    pub career_experience: Option<String>,
    pub research_publications: Option<String>,
    pub awards: Option<String>,
}

/// A profile that is not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProfile {
    pub user_id: i64,
    pub attributes: ProfileAttributes,
}

/// Repository trait for Profile data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// List every profile, ordered by ID.
    async fn find_all(&self) -> Result<Vec<Profile>, AppError>;

    /// Find a profile by ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Profile>, AppError>;

    /// Insert a new profile and return it with its assigned ID.
    async fn create(&self, profile: NewProfile) -> Result<Profile, AppError>;

    /// Persist every attribute of an existing profile.
    async fn update(&self, profile: &Profile) -> Result<Profile, AppError>;
}
