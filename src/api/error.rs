use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::services::{PlanGenerationError, VideoLookupError};

pub const PLAN_GENERATION_FAILED: &str = "Failed to generate workout plan after several attempts.";
pub const INVALID_REQUEST_BODY: &str = "Invalid request body.";
pub const INVALID_QUERY: &str = "Invalid query parameters.";
pub const UNEXPECTED_ERROR: &str = "An unexpected server error occurred.";

/// Every handler failure. Rendered as `{"error": <message>}`; diagnostic
/// detail is logged, never returned.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Invalid query parameters: {0}")]
    InvalidQuery(String),

    #[error(transparent)]
    PlanGeneration(#[from] PlanGenerationError),

    #[error(transparent)]
    VideoLookup(#[from] VideoLookupError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) | ApiError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            ApiError::PlanGeneration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::VideoLookup(e) => match e {
                VideoLookupError::MissingName => StatusCode::BAD_REQUEST,
                VideoLookupError::NotFound(_) => StatusCode::NOT_FOUND,
                VideoLookupError::InvalidCredential
                | VideoLookupError::QuotaExceeded
                | VideoLookupError::Provider { .. } => StatusCode::SERVICE_UNAVAILABLE,
                VideoLookupError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    /// Message shown to the caller.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::InvalidBody(_) => INVALID_REQUEST_BODY.to_string(),
            ApiError::InvalidQuery(_) => INVALID_QUERY.to_string(),
            ApiError::PlanGeneration(_) => PLAN_GENERATION_FAILED.to_string(),
            ApiError::VideoLookup(e) => e.to_string(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidQuery(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            ApiError::InvalidBody(detail) => tracing::debug!("Rejected request body: {}", detail),
            ApiError::InvalidQuery(detail) => tracing::debug!("Rejected query string: {}", detail),
            ApiError::PlanGeneration(e) => tracing::error!("{}", e),
            ApiError::VideoLookup(VideoLookupError::Unexpected(detail)) => {
                tracing::error!("An unexpected error occurred: {}", detail)
            }
            ApiError::VideoLookup(_) => {}
        }

        (status, Json(json!({ "error": self.public_message() }))).into_response()
    }
}
