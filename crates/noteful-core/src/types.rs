//! Core data types for the Noteful API.
//!
//! A [`Note`] is the only entity: an integer id assigned by the store, a
//! required title, and free-form content. Request payloads arrive as
//! [`NewNote`] (create) and [`NotePatch`] (update); both tolerate unknown
//! fields so clients can send extra keys without being rejected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

// ============================================================================
// ID Types
// ============================================================================

/// Identifier of a note.
///
/// Ids are positive integers assigned by the store. Path parameters arrive as
/// text and are coerced through [`FromStr`] before any comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub u64);

impl NoteId {
    /// The id handed to the first note of an empty store.
    pub const FIRST: NoteId = NoteId(1);

    /// Returns the id that follows this one, or `None` at `u64::MAX`.
    #[must_use]
    pub const fn checked_next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(next) => Some(Self(next)),
            None => None,
        }
    }

    /// Returns the inner integer.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for NoteId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

// ============================================================================
// Note
// ============================================================================

/// A stored note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Store-assigned id, immutable after creation.
    pub id: NoteId,
    /// Non-empty title.
    pub title: String,
    /// Body text, empty when the note was created without content.
    #[serde(default)]
    pub content: String,
}

impl Note {
    /// Whether `term` occurs literally in the title or the content.
    ///
    /// Matching is case-sensitive; there is no tokenization or pattern syntax.
    pub fn matches(&self, term: &str) -> bool {
        self.title.contains(term) || self.content.contains(term)
    }
}

/// Payload for creating a note.
///
/// The id is never taken from the client; the store assigns it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNote {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl NewNote {
    /// Create a payload with a title and optional content.
    pub fn new(title: impl Into<String>, content: Option<String>) -> Self {
        Self {
            title: Some(title.into()),
            content,
        }
    }

    /// Build the stored note for `id`, defaulting content to empty.
    ///
    /// Callers validate first; a missing title becomes an empty string here.
    pub fn into_note(self, id: NoteId) -> Note {
        Note {
            id,
            title: self.title.unwrap_or_default(),
            content: self.content.unwrap_or_default(),
        }
    }
}

/// Partial update of a note.
///
/// Only `title` and `content` are recognized. A field that is absent (or
/// `null`) leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Fields a client may change on an existing note.
pub const UPDATABLE_FIELDS: [&str; 2] = ["title", "content"];

impl NotePatch {
    /// Names of the recognized fields present in this patch.
    pub fn fields(&self) -> Vec<&'static str> {
        let present = [self.title.is_some(), self.content.is_some()];
        UPDATABLE_FIELDS
            .iter()
            .zip(present)
            .filter_map(|(name, is_present)| is_present.then_some(*name))
            .collect()
    }

    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }

    /// Overwrite the fields of `note` that are present in this patch.
    pub fn apply(self, note: &mut Note) {
        if let Some(title) = self.title {
            note.title = title;
        }
        if let Some(content) = self.content {
            note.content = content;
        }
    }
}
