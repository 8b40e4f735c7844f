//! noteful-core: domain types for the Noteful API
//!
//! This crate provides:
//! - The [`Note`] record and its [`NoteId`]
//! - Create and update payloads ([`NewNote`], [`NotePatch`])
//! - Request validation shared by the store and the HTTP layer

pub mod types;
pub mod validation;

pub use types::{NewNote, Note, NoteId, NotePatch, UPDATABLE_FIELDS};
pub use validation::{validate_new_note, validate_patch, ValidationError, MISSING_TITLE};
