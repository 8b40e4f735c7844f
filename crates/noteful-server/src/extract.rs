//! Request extractors whose rejections are [`ApiError`]s.
//!
//! Axum's stock extractors answer malformed input with plain-text bodies.
//! These wrappers route every rejection through the JSON error response.

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request, rejection::JsonRejection},
    http::request::Parts,
    Json,
};
use noteful_core::NoteId;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// Message returned when a route that needs an id did not get one.
pub const MISSING_ID: &str = "Missing id in request";

/// Message returned when a body is valid JSON but not an object.
pub const BODY_NOT_OBJECT: &str = "Request body must be a JSON object";

/// JSON request body.
///
/// Like `axum::Json`, but only a JSON object is accepted. Serde would also
/// read a struct from an array (`["Cat"]`), so the body is checked first. A
/// missing content type, a syntax error or a body of the wrong shape becomes a
/// 400 `ApiError`.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(json_rejection)?;

        if !value.is_object() {
            return Err(ApiError::BadRequest(BODY_NOT_OBJECT.to_string()));
        }

        serde_json::from_value(value).map(Self).map_err(|e| {
            tracing::debug!(error = %e, "Rejected JSON body");
            ApiError::BadRequest(format!("Failed to deserialize the JSON body: {e}"))
        })
    }
}

fn json_rejection(rejection: JsonRejection) -> ApiError {
    tracing::debug!(error = %rejection, "Rejected JSON body");
    ApiError::BadRequest(rejection.body_text())
}

/// Note id taken from the `{id}` path segment.
///
/// Text that is not a valid id cannot name a stored note, so it is reported as
/// not found rather than as a client error.
#[derive(Debug, Clone, Copy)]
pub struct NoteIdParam(pub NoteId);

impl<S> FromRequestParts<S> for NoteIdParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::BadRequest(MISSING_ID.to_string()))?;

        if raw.trim().is_empty() {
            return Err(ApiError::BadRequest(MISSING_ID.to_string()));
        }

        raw.parse().map(Self).map_err(|_| {
            tracing::debug!(id = %raw, "Path id is not a note id");
            ApiError::NotFound
        })
    }
}
