//! API error types with JSON responses.
//!
//! `ApiError` is the single place where a failure becomes an HTTP response.
//! Handlers return it through `?` and never write error bodies themselves.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use noteful_core::ValidationError;
use noteful_store::StoreError;
use serde::Serialize;

/// Message used for every 404.
pub const NOT_FOUND_MESSAGE: &str = "Not found";

/// Message used for a 405.
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";

/// Message used for every 500; the cause goes into `error.detail`.
pub const INTERNAL_MESSAGE: &str = "Internal server error";

/// API error that can be returned from handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Bad request (400).
    #[error("{0}")]
    BadRequest(String),

    /// Not found (404).
    #[error("Not found")]
    NotFound,

    /// Method not allowed on a known route (405).
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Store error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl ApiError {
    /// Get the error code string for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::NotFound => "NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::Store(StoreError::Invalid(_)) => "BAD_REQUEST",
            Self::Store(_) => "STORAGE_ERROR",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Store(e) => match e {
                StoreError::Invalid(_) => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    /// Human-readable message for the response body.
    pub fn message(&self) -> String {
        match self {
            Self::BadRequest(message) => message.clone(),
            Self::NotFound => NOT_FOUND_MESSAGE.to_string(),
            Self::Store(StoreError::Invalid(e)) => e.to_string(),
            Self::MethodNotAllowed => METHOD_NOT_ALLOWED_MESSAGE.to_string(),
            Self::Store(_) => INTERNAL_MESSAGE.to_string(),
        }
    }
}

/// JSON error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub message: String,
    /// Error details.
    pub error: ErrorDetails,
}

/// Error details within the response.
#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    /// Error code (e.g., "NOT_FOUND", "BAD_REQUEST").
    pub code: String,
    /// HTTP status, repeated for clients that only see the body.
    pub status: u16,
    /// Underlying cause, only reported for server faults.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = status.is_server_error().then(|| self.to_string());

        if let Some(detail) = &detail {
            tracing::error!(error = %detail, "Request failed");
        }

        let body = ErrorResponse {
            message: self.message(),
            error: ErrorDetails {
                code: self.code().to_string(),
                status: status.as_u16(),
                detail,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
