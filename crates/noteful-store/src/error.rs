//! Error types for the storage layer.

use std::path::PathBuf;

use noteful_core::{NoteId, ValidationError};
use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
///
/// A lookup that finds nothing is not an error; operations report it through
/// `Option`/`bool` and the caller decides what it means.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A note failed validation on its way into the store.
    #[error("invalid note: {0}")]
    Invalid(#[from] ValidationError),

    /// Two notes in a seed share the same id.
    #[error("duplicate note id: {0}")]
    DuplicateId(NoteId),

    /// No id is left above the largest stored one.
    #[error("note ids exhausted: no id after {0}")]
    IdsExhausted(NoteId),

    /// The seed file could not be read.
    #[error("failed to read seed file {path}: {source}")]
    SeedRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The seed file is not a JSON array of notes.
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
