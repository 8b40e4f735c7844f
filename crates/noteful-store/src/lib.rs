//! noteful-store: Storage layer for the Noteful API
//!
//! This crate provides:
//! - An in-memory, insertion-ordered note collection
//! - Id assignment, substring search and partial updates
//! - Loading an initial set of notes from a JSON seed file
//!
//! Every operation is async and returns a [`StoreResult`], so callers do not
//! depend on the collection living in memory.
//!
//! # Usage
//!
//! ```rust,ignore
//! use noteful_store::{Store, StoreConfig};
//!
//! let store = Store::open(StoreConfig::from_env()).await?;
//!
//! let note = store.create(NewNote::new("Groceries", None)).await?;
//! let hits = store.list(Some("Groc")).await?;
//! ```

pub mod error;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use store::{load_seed, Store, StoreConfig};

// Re-export noteful-core for downstream crates
pub use noteful_core;
