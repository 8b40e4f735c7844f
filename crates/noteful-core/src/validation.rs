//! Request validation for note payloads.
//!
//! The only schema rule is that a note carries a non-empty title. It is checked
//! here before the store is touched, and again by the store itself.

use thiserror::Error;

use crate::types::{NewNote, NotePatch};

/// Message returned to clients when a title is missing or empty.
pub const MISSING_TITLE: &str = "Missing title in request body";

/// Validation failures for incoming payloads.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `title` is absent or empty.
    #[error("Missing title in request body")]
    MissingTitle,
}

/// Check a create payload.
pub fn validate_new_note(note: &NewNote) -> Result<(), ValidationError> {
    match note.title.as_deref() {
        Some(title) if !title.is_empty() => Ok(()),
        _ => Err(ValidationError::MissingTitle),
    }
}

/// Check an update payload.
///
/// An absent title is fine (the stored one is kept), but an explicitly empty
/// one would break the non-empty title invariant.
pub fn validate_patch(patch: &NotePatch) -> Result<(), ValidationError> {
    match patch.title.as_deref() {
        Some("") => Err(ValidationError::MissingTitle),
        _ => Ok(()),
    }
}
