//! Language Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use super::parse_id;
use crate::application::dto::request::CreateLanguageRequest;
use crate::application::dto::response::LanguageResponse;
use crate::application::services::LanguageError;
use crate::domain::NewUserLanguage;
use crate::presentation::http::extractors::JsonBody;
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

impl From<LanguageError> for AppError {
    fn from(e: LanguageError) -> Self {
        match e {
            LanguageError::NotFound | LanguageError::UserNotFound => {
                AppError::NotFound(e.to_string())
            }
            LanguageError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

pub async fn list_languages(
    State(state): State<AppState>,
) -> Result<Json<Vec<LanguageResponse>>, AppError> {
    let languages = state.languages.list_languages().await?;
    Ok(Json(languages.into_iter().map(LanguageResponse::from).collect()))
}

/// Languages listed by one user
pub async fn list_user_languages(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<LanguageResponse>>, AppError> {
    let user_id = parse_id(&user_id, "user")?;
    let languages = state.languages.list_user_languages(user_id).await?;

    Ok(Json(languages.into_iter().map(LanguageResponse::from).collect()))
}

pub async fn add_language(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateLanguageRequest>,
) -> Result<(StatusCode, Json<LanguageResponse>), AppError> {
    body.validate().map_err(validation_error)?;
    let user_id = body
        .owner_id()
        .ok_or_else(|| AppError::BadRequest("User ID is required".into()))?;

    let language = state
        .languages
        .add_language(NewUserLanguage {
            user_id,
            language_name: body.language_name,
            proficiency_level: body.proficiency_level,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(LanguageResponse::from(language))))
}

pub async fn delete_language(
    State(state): State<AppState>,
    Path(language_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let language_id = parse_id(&language_id, "language")?;
    state.languages.delete_language(language_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
