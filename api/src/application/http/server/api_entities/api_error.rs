use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rentwise_core::domain::{
    common::entities::app_errors::CoreError,
    location_analysis::{AnalysisResult, Language, fallback::fallback_analysis},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Error body. `fallback` is always a complete analysis the client can render.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    #[schema(example = "Missing or invalid 'address'.")]
    pub error: String,
    pub fallback: AnalysisResult,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{message}")]
    BadRequest { message: String, language: Language },

    #[error("{message}")]
    InternalServerError { message: String, language: Language },
}

impl ApiError {
    pub fn from_core(error: CoreError, language: Language) -> Self {
        match error {
            CoreError::Validation(message) => ApiError::BadRequest { message, language },
            other => ApiError::InternalServerError {
                message: other.to_string(),
                language,
            },
        }
    }

    /// Failures outside the analysis flow carry the English fallback.
    pub fn unexpected(message: impl Into<String>) -> Self {
        ApiError::InternalServerError {
            message: message.into(),
            language: Language::En,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::InternalServerError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (message, language) = match self {
            ApiError::BadRequest { message, language }
            | ApiError::InternalServerError { message, language } => (message, language),
        };

        let body = ApiErrorResponse {
            error: message,
            fallback: fallback_analysis(language),
        };

        (status, Json(body)).into_response()
    }
}
