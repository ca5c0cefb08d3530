use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{anagram::CompareError, validation::ValidationError};

/// Rejections are sent back as a bare JSON string.
#[derive(Debug)]
pub enum ApiError {
    Validation(ValidationError),
    EqualWords,
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::Validation(e)
    }
}

impl From<CompareError> for ApiError {
    fn from(e: CompareError) -> Self {
        match e {
            CompareError::Validation(e) => ApiError::Validation(e),
            CompareError::EqualWords => ApiError::EqualWords,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match self {
            ApiError::Validation(e) => e.to_string(),
            ApiError::EqualWords => CompareError::EqualWords.to_string(),
        };
        tracing::debug!("Rejected request: {message}.");
        (StatusCode::BAD_REQUEST, Json(message)).into_response()
    }
}
