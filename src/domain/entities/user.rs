//! User entity and repository trait.
//!
//! Maps to the `users` table in the database schema.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Represents a registered user.
///
/// Maps to the `users` table:
/// - user_id: BIGSERIAL PRIMARY KEY
/// - first_name: VARCHAR(100) NULL
/// - last_name: VARCHAR(100) NULL
/// - university: VARCHAR(255) NULL
/// - email: VARCHAR(255) NULL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct User {
    /// Store-assigned ID (primary key)
    pub id: i64,

    pub first_name: Option<String>,

    pub last_name: Option<String>,

    pub university: Option<String>,

    pub email: Option<String>,
}

impl User {
    /// Apply a partial update. Only fields present in the patch overwrite
    /// the stored values; the id never changes.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(first_name) = patch.first_name {
            self.first_name = Some(first_name);
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = Some(last_name);
        }
        if let Some(university) = patch.university {
            self.university = Some(university);
        }
        if let Some(email) = patch.email {
            self.email = Some(email);
        }
    }
}

/// Fields of a user that are not yet persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub university: Option<String>,
    pub email: Option<String>,
}

/// Partial update for a user. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub university: Option<String>,
    pub email: Option<String>,
}

/// Repository trait for User data access operations.
///
/// Implementations of this trait handle the actual storage interactions.
/// The trait is defined in the domain layer to maintain dependency inversion.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List every user, ordered by ID.
    async fn find_all(&self) -> Result<Vec<User>, AppError>;

    /// Find a user by ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Check whether a user with this ID exists.
    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// Insert a new user and return it with its assigned ID.
    async fn create(&self, user: NewUser) -> Result<User, AppError>;

    /// Persist every field of an existing user.
    async fn update(&self, user: &User) -> Result<User, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ada() -> User {
        User {
            id: 7,
            first_name: Some("Ada".into()),
            last_name: Some("Lovelace".into()),
            university: Some("London".into()),
            email: Some("ada@example.com".into()),
        }
    }

    #[test]
    fn test_apply_empty_patch_keeps_everything() {
        let mut user = ada();
        user.apply(UserPatch::default());
        assert_eq!(user, ada());
    }

    #[test]
    fn test_apply_overwrites_only_present_fields() {
        let mut user = ada();
        user.apply(UserPatch {
            university: Some("Cambridge".into()),
            email: Some("ada@cam.example".into()),
            ..Default::default()
        });

        assert_eq!(user.id, 7);
        assert_eq!(user.first_name.as_deref(), Some("Ada"));
        assert_eq!(user.last_name.as_deref(), Some("Lovelace"));
        assert_eq!(user.university.as_deref(), Some("Cambridge"));
        assert_eq!(user.email.as_deref(), Some("ada@cam.example"));
    }
}
