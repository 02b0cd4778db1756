//! Error types for gds-ui

use crate::services::CiError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404), e.g. a region name outside the registry
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Invalid request (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Upstream fetch failed (502)
    #[error("Fetch failed: {0}")]
    FetchFailed(String),

    /// Upstream response unparseable (502)
    #[error("Parse failed: {0}")]
    ParseFailed(String),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<CiError> for ApiError {
    fn from(err: CiError) -> Self {
        match err {
            CiError::FetchFailed(msg) => ApiError::FetchFailed(msg),
            CiError::ParseFailed(msg) => ApiError::ParseFailed(msg),
        }
    }
}

impl From<gds_common::Error> for ApiError {
    fn from(err: gds_common::Error) -> Self {
        use gds_common::Error;
        match err {
            Error::NotFound(msg) => ApiError::NotFound(msg),
            Error::InvalidInput(msg) => ApiError::BadRequest(msg),
            Error::FetchFailed(msg) => ApiError::FetchFailed(msg),
            Error::ParseFailed(msg) => ApiError::ParseFailed(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            ApiError::FetchFailed(msg) => (StatusCode::BAD_GATEWAY, "FETCH_FAILED", msg),
            ApiError::ParseFailed(msg) => (StatusCode::BAD_GATEWAY, "PARSE_FAILED", msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg),
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
