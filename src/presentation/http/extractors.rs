//! Custom Extractors

use axum::extract::{rejection::JsonRejection, FromRequest};

use crate::shared::error::AppError;

/// `Json` body extractor whose rejections (bad syntax, wrong field types,
/// missing content type) are reported as a 400 `AppError`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
