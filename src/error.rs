// src/error.rs
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ErrorResponse;
use crate::services::model_client::ModelError;
use crate::services::prompts::PromptError;

pub const MODEL_NOT_INITIALIZED: &str = "AI model not initialized";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("AI model not initialized")]
    ModelNotInitialized,

    #[error("An error occurred: {0}")]
    Upstream(String),
}

impl From<PromptError> for AppError {
    fn from(err: PromptError) -> Self {
        AppError::Upstream(err.to_string())
    }
}

impl From<ModelError> for AppError {
    fn from(err: ModelError) -> Self {
        AppError::Upstream(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::ModelNotInitialized | AppError::Upstream(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses() {
        assert_eq!(
            AppError::BadRequest("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::ModelNotInitialized.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Upstream("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn messages() {
        assert_eq!(
            AppError::ModelNotInitialized.to_string(),
            MODEL_NOT_INITIALIZED
        );
        let err: AppError = ModelError::Network("connection refused".into()).into();
        assert_eq!(
            err.to_string(),
            "An error occurred: Network error: connection refused"
        );
        let err: AppError = PromptError::MissingField("country".into()).into();
        assert!(err.to_string().contains("country"));
    }
}
