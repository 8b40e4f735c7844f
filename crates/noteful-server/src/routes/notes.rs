//! Note routes for the Noteful API.
//!
//! This module implements the note-related HTTP endpoints:
//! - GET /notes - List notes, optionally filtered by `searchTerm`
//! - GET /notes/{id} - Fetch one note
//! - POST /notes - Create a note
//! - PUT /notes/{id} - Update a note's title and/or content
//! - DELETE /notes/{id} - Delete a note
//!
//! The router is nested under `/api` by [`super::build_router`].

use axum::{
    Json, Router,
    extract::{OriginalUri, Query, State},
    http::{HeaderMap, StatusCode, header},
    routing::get,
};
use noteful_core::{NewNote, Note, NoteId, NotePatch, validate_new_note, validate_patch};
use serde::Deserialize;

use super::method_not_allowed;
use crate::error::{ApiError, ApiResult};
use crate::extract::{JsonBody, MISSING_ID, NoteIdParam};
use crate::state::AppState;

// ============================================================================
// Request Types
// ============================================================================

/// Query parameters for GET /notes.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListNotesQuery {
    /// Substring to look for in titles and contents.
    pub search_term: Option<String>,
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Canonical URL of a newly created note.
///
/// `collection_path` is the path the POST arrived on. The URL is absolute when
/// the request named its host, and path-only otherwise.
fn note_location(host: Option<&str>, collection_path: &str, id: NoteId) -> String {
    let path = format!("{}/{}", collection_path.trim_end_matches('/'), id);
    match host {
        Some(host) => format!("http://{host}{path}"),
        None => path,
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /notes - List notes.
///
/// # Response
///
/// - 200 OK: array of notes, empty when nothing matches
async fn list_notes(
    State(state): State<AppState>,
    Query(query): Query<ListNotesQuery>,
) -> ApiResult<Json<Vec<Note>>> {
    let notes = state.store().list(query.search_term.as_deref()).await?;

    tracing::info!(
        count = notes.len(),
        search_term = query.search_term.as_deref().unwrap_or(""),
        "Listed notes"
    );

    Ok(Json(notes))
}

/// GET /notes/{id} - Fetch a note.
///
/// # Response
///
/// - 200 OK: the note
/// - 404 Not Found: no note has this id
async fn get_note(
    State(state): State<AppState>,
    NoteIdParam(id): NoteIdParam,
) -> ApiResult<Json<Note>> {
    let note = state.store().get(id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(note))
}

/// POST /notes - Create a note.
///
/// # Request
///
/// Body: `{ "title": "...", "content": "..." }`, content optional
///
/// # Response
///
/// - 201 Created: the stored note, with a `Location` header
/// - 400 Bad Request: missing or empty title, or a malformed body
async fn create_note(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    JsonBody(new_note): JsonBody<NewNote>,
) -> ApiResult<(StatusCode, [(header::HeaderName, String); 1], Json<Note>)> {
    validate_new_note(&new_note)?;

    let note = state.store().create(new_note).await?;

    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok());
    let location = note_location(host, uri.path(), note.id);

    tracing::info!(note_id = %note.id, title = %note.title, "Note created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(note),
    ))
}

/// PUT /notes/{id} - Update a note.
///
/// Only `title` and `content` are applied; other keys are ignored, and keys
/// that are not sent keep their stored values.
///
/// # Response
///
/// - 200 OK: the updated note
/// - 400 Bad Request: empty title, or a malformed body
/// - 404 Not Found: no note has this id
async fn update_note(
    State(state): State<AppState>,
    NoteIdParam(id): NoteIdParam,
    JsonBody(patch): JsonBody<NotePatch>,
) -> ApiResult<Json<Note>> {
    validate_patch(&patch)?;

    let fields = patch.fields();
    let note = state
        .store()
        .update(id, patch)
        .await?
        .ok_or(ApiError::NotFound)?;

    tracing::info!(note_id = %id, ?fields, "Note updated");

    Ok(Json(note))
}

/// DELETE /notes/{id} - Delete a note.
///
/// # Response
///
/// - 204 No Content: the note was removed
/// - 404 Not Found: no note has this id (deleting twice is not a fault)
async fn delete_note(
    State(state): State<AppState>,
    NoteIdParam(id): NoteIdParam,
) -> ApiResult<StatusCode> {
    if !state.store().delete(id).await? {
        return Err(ApiError::NotFound);
    }

    tracing::info!(note_id = %id, "Note deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /notes - Delete without an id.
///
/// # Response
///
/// - 400 Bad Request: always
async fn delete_without_id() -> ApiError {
    ApiError::BadRequest(MISSING_ID.to_string())
}

/// Build note routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/notes",
            get(list_notes).post(create_note).delete(delete_without_id),
        )
        .route(
            "/notes/{id}",
            get(get_note).put(update_note).delete(delete_note),
        )
        .method_not_allowed_fallback(method_not_allowed)
}

// ============================================================================
// Tests
// ============================================================================
