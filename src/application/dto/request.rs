//! Request DTOs
//!
//! Data structures for API request bodies.

use serde::Deserialize;
use validator::Validate;

use crate::application::services::SendMessageDto;
use crate::domain::{NewUser, ProfileAttributes, UserPatch};

/// Reference to a match embedded in a request body. Only the ID is read.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRef {
    pub match_id: Option<i64>,
}

/// Reference to a user embedded in a request body. Only the ID is read.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    pub user_id: Option<i64>,
}

/// Send message request.
///
/// Accepts the flat form `{"matchId", "senderId", "content"}` as well as the
/// nested form older clients post:
/// `{"match": {"matchId"}, "sender": {"userId"}, "messageContent"}`.
/// Flat ids win when both are given.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub match_id: Option<i64>,

    pub sender_id: Option<i64>,

    #[serde(alias = "messageContent")]
    pub content: Option<String>,

    #[serde(rename = "match")]
    pub match_ref: Option<MatchRef>,

    pub sender: Option<UserRef>,
}

impl From<SendMessageRequest> for SendMessageDto {
    fn from(body: SendMessageRequest) -> Self {
        Self {
            match_id: body
                .match_id
                .or_else(|| body.match_ref.and_then(|m| m.match_id)),
            sender_id: body
                .sender_id
                .or_else(|| body.sender.and_then(|s| s.user_id)),
            content: body.content,
        }
    }
}

/// Create user request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(length(max = 100, message = "First name must be at most 100 characters"))]
    pub first_name: Option<String>,

    #[validate(length(max = 100, message = "Last name must be at most 100 characters"))]
    pub last_name: Option<String>,

    #[validate(length(max = 255, message = "University must be at most 255 characters"))]
    pub university: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
}

impl From<CreateUserRequest> for NewUser {
    fn from(body: CreateUserRequest) -> Self {
        Self {
            first_name: body.first_name,
            last_name: body.last_name,
            university: body.university,
            email: body.email,
        }
    }
}

/// Update user request. Null or absent fields are left unchanged.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(length(max = 100, message = "First name must be at most 100 characters"))]
    pub first_name: Option<String>,

    #[validate(length(max = 100, message = "Last name must be at most 100 characters"))]
    pub last_name: Option<String>,

    #[validate(length(max = 255, message = "University must be at most 255 characters"))]
    pub university: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(body: UpdateUserRequest) -> Self {
        Self {
            first_name: body.first_name,
            last_name: body.last_name,
            university: body.university,
            email: body.email,
        }
    }
}

/// Create match request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMatchRequest {
    pub user_one_id: i64,
    pub user_two_id: i64,
}

/// Create or replace profile request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRequest {
    /// Owning user; required on create, ignored on replace
    pub user_id: Option<i64>,

    #[serde(flatten)]
    pub attributes: ProfileAttributes,
}

/// Add language request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLanguageRequest {
    pub user_id: Option<i64>,

    pub user: Option<UserRef>,

    #[validate(length(min = 1, max = 100, message = "Language name must be 1-100 characters"))]
    pub language_name: String,

    #[validate(length(max = 50, message = "Proficiency level must be at most 50 characters"))]
    pub proficiency_level: Option<String>,
}

impl CreateLanguageRequest {
    /// The owning user's ID from either the flat or the nested form.
    pub fn owner_id(&self) -> Option<i64> {
        self.user_id
            .or_else(|| self.user.as_ref().and_then(|u| u.user_id))
    }
}
