//! Main store implementation for note operations.
//!
//! The `Store` owns the note collection and provides every CRUD operation on
//! it. Notes live in insertion order in a single vector; lookups are linear
//! scans. All mutations go through one write lock, so concurrent requests
//! never see a half-applied change.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use noteful_core::{validate_new_note, validate_patch, NewNote, Note, NoteId, NotePatch};
use tokio::sync::RwLock;

use crate::error::{StoreError, StoreResult};

/// Configuration for building a store.
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// JSON file with the initial notes, if any.
    pub seed_path: Option<PathBuf>,
}

impl StoreConfig {
    /// Create configuration from environment variables.
    ///
    /// Reads:
    /// - `NOTES_SEED_PATH` - Optional path to a JSON array of notes
    pub fn from_env() -> Self {
        let seed_path = std::env::var("NOTES_SEED_PATH")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        Self { seed_path }
    }
}

/// In-memory note store.
#[derive(Debug, Default)]
pub struct Store {
    notes: RwLock<Vec<Note>>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `notes` in the given order.
    ///
    /// Fails if two notes share an id or a note has an empty title.
    pub fn with_notes(notes: Vec<Note>) -> StoreResult<Self> {
        let mut seen = HashSet::with_capacity(notes.len());
        for note in &notes {
            if note.title.is_empty() {
                return Err(noteful_core::ValidationError::MissingTitle.into());
            }
            if !seen.insert(note.id) {
                return Err(StoreError::DuplicateId(note.id));
            }
        }

        Ok(Self {
            notes: RwLock::new(notes),
        })
    }

    /// Build a store from configuration, loading the seed file when one is set.
    pub async fn open(config: StoreConfig) -> StoreResult<Self> {
        match config.seed_path {
            Some(path) => {
                let notes = load_seed(&path).await?;
                tracing::info!(path = %path.display(), count = notes.len(), "Loaded seed notes");
                Self::with_notes(notes)
            }
            None => Ok(Self::new()),
        }
    }

    /// Number of stored notes.
    pub async fn len(&self) -> usize {
        self.notes.read().await.len()
    }

    /// Whether the store holds no notes.
    pub async fn is_empty(&self) -> bool {
        self.notes.read().await.is_empty()
    }

    // ==================== Note Operations ====================

    /// List notes in insertion order.
    ///
    /// With a non-empty `search_term`, only notes whose title or content
    /// contains it literally are returned.
    pub async fn list(&self, search_term: Option<&str>) -> StoreResult<Vec<Note>> {
        let notes = self.notes.read().await;

        let result = match search_term.filter(|term| !term.is_empty()) {
            Some(term) => notes.iter().filter(|note| note.matches(term)).cloned().collect(),
            None => notes.clone(),
        };

        Ok(result)
    }

    /// Get a note by id, or `None` if there is no such note.
    pub async fn get(&self, id: NoteId) -> StoreResult<Option<Note>> {
        let notes = self.notes.read().await;
        Ok(notes.iter().find(|note| note.id == id).cloned())
    }

    /// Insert a new note and return it with its assigned id.
    ///
    /// The id is one past the largest id in the store, or 1 when it is empty.
    /// Fails without inserting when the largest id is already `u64::MAX`.
    pub async fn create(&self, new_note: NewNote) -> StoreResult<Note> {
        validate_new_note(&new_note)?;

        let mut notes = self.notes.write().await;
        let id = match notes.iter().map(|note| note.id).max() {
            Some(max) => max.checked_next().ok_or(StoreError::IdsExhausted(max))?,
            None => NoteId::FIRST,
        };

        let note = new_note.into_note(id);
        notes.push(note.clone());

        tracing::debug!(note_id = %id, "Note created");
        Ok(note)
    }

    /// Apply `patch` to the note with `id`.
    ///
    /// Returns the updated note, or `None` if there is no such note (in which
    /// case nothing changes).
    pub async fn update(&self, id: NoteId, patch: NotePatch) -> StoreResult<Option<Note>> {
        validate_patch(&patch)?;

        let mut notes = self.notes.write().await;
        let Some(note) = notes.iter_mut().find(|note| note.id == id) else {
            return Ok(None);
        };

        patch.apply(note);
        tracing::debug!(note_id = %id, "Note updated");
        Ok(Some(note.clone()))
    }

    /// Remove the note with `id`. Returns whether a note was removed.
    pub async fn delete(&self, id: NoteId) -> StoreResult<bool> {
        let mut notes = self.notes.write().await;
        let Some(index) = notes.iter().position(|note| note.id == id) else {
            return Ok(false);
        };

        notes.remove(index);
        tracing::debug!(note_id = %id, "Note deleted");
        Ok(true)
    }
}

/// Read a JSON array of notes from `path`.
pub async fn load_seed(path: &Path) -> StoreResult<Vec<Note>> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| StoreError::SeedRead {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(serde_json::from_slice(&bytes)?)
}
