//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::{Deserialize, Serialize};

use crate::application::services::MessageDto;
use crate::domain::{Match, Profile, ProfileAttributes, User, UserLanguage};

/// Message response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub message_id: i64,
    pub match_id: i64,
    pub sender_id: i64,
    pub message_content: String,
    pub sent_at: String,
    pub is_read: bool,
}

impl From<MessageDto> for MessageResponse {
    fn from(dto: MessageDto) -> Self {
        Self {
            message_id: dto.id,
            match_id: dto.match_id,
            sender_id: dto.sender_id,
            message_content: dto.content,
            sent_at: dto.sent_at.to_rfc3339(),
            is_read: dto.is_read,
        }
    }
}

/// User response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub university: Option<String>,
    pub email: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            university: user.university,
            email: user.email,
        }
    }
}

/// Match response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    pub match_id: i64,
    pub user_one_id: i64,
    pub user_two_id: i64,
    pub matched_at: String,
}

impl From<Match> for MatchResponse {
    fn from(m: Match) -> Self {
        Self {
            match_id: m.id,
            user_one_id: m.user_one_id,
            user_two_id: m.user_two_id,
            matched_at: m.matched_at.to_rfc3339(),
        }
    }
}

/// Profile response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub profile_id: i64,
    pub user_id: i64,
    #[serde(flatten)]
    pub attributes: ProfileAttributes,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            profile_id: profile.id,
            user_id: profile.user_id,
            attributes: profile.attributes,
        }
    }
}

/// Language response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageResponse {
    pub language_id: i64,
    pub user_id: i64,
    pub language_name: String,
    pub proficiency_level: Option<String>,
}

impl From<UserLanguage> for LanguageResponse {
    fn from(language: UserLanguage) -> Self {
        Self {
            language_id: language.id,
            user_id: language.user_id,
            language_name: language.language_name,
            proficiency_level: language.proficiency_level,
        }
    }
}
