//! Profile Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::parse_id;
use crate::application::dto::request::ProfileRequest;
use crate::application::dto::response::ProfileResponse;
use crate::application::services::ProfileError;
use crate::domain::NewProfile;
use crate::presentation::http::extractors::JsonBody;
use crate::shared::error::AppError;
use crate::startup::AppState;

impl From<ProfileError> for AppError {
    fn from(e: ProfileError) -> Self {
        match e {
            ProfileError::NotFound | ProfileError::UserNotFound => AppError::NotFound(e.to_string()),
            ProfileError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

pub async fn list_profiles(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProfileResponse>>, AppError> {
    let profiles = state.profiles.list_profiles().await?;
    Ok(Json(profiles.into_iter().map(ProfileResponse::from).collect()))
}

/// Create a profile for an existing user
pub async fn create_profile(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<ProfileRequest>,
) -> Result<(StatusCode, Json<ProfileResponse>), AppError> {
    let user_id = body
        .user_id
        .ok_or_else(|| AppError::BadRequest("User ID is required".into()))?;

    let profile = state
        .profiles
        .create_profile(NewProfile {
            user_id,
            attributes: body.attributes,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ProfileResponse::from(profile))))
}

pub async fn get_profile(
    State(state): State<AppState>,
    Path(profile_id): Path<String>,
) -> Result<Json<ProfileResponse>, AppError> {
    let profile_id = parse_id(&profile_id, "profile")?;
    let profile = state.profiles.get_profile(profile_id).await?;

    Ok(Json(ProfileResponse::from(profile)))
}

/// Replace every attribute of a profile. The owning user never changes.
pub async fn replace_profile(
    State(state): State<AppState>,
    Path(profile_id): Path<String>,
    JsonBody(body): JsonBody<ProfileRequest>,
) -> Result<Json<ProfileResponse>, AppError> {
    let profile_id = parse_id(&profile_id, "profile")?;
    let profile = state
        .profiles
        .replace_profile(profile_id, body.attributes)
        .await?;

    Ok(Json(ProfileResponse::from(profile)))
}
