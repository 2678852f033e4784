//! Word record storage
//!
//! `WordStore` is the only owner of scheduling state. Backends:
//! - `MemoryWordStore`: process-local, used for tests and ephemeral sessions
//! - `JsonWordStore`: persisted to a single JSON document
//!
//! Unknown ids are reported as `None`/`false`, never as errors. Errors are
//! reserved for the storage medium itself.

mod collection;
mod json;
mod memory;

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::models::{NewWord, ReviewOutcome, Word, WordId, WordUpdate};

pub use collection::WordCollection;
pub use json::{JsonWordStore, DEFAULT_FILE_NAME};
pub use memory::MemoryWordStore;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Word store lock poisoned")]
    LockPoisoned,

    #[error("Data directory not found")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Keyed collection of word records
///
/// Every mutation is atomic per call: `apply_review` in particular reads,
/// schedules and writes back under one lock, so concurrent reviews of the
/// same word cannot lose an update.
pub trait WordStore: Send + Sync {
    /// Insert a new word with fresh id and default scheduling state
    fn create(&self, new_word: NewWord, now: DateTime<Utc>) -> Result<Word>;

    fn get(&self, id: WordId) -> Result<Option<Word>>;

    /// Merge a content edit. Never creates a record.
    fn update(&self, id: WordId, update: WordUpdate) -> Result<Option<Word>>;

    /// Remove a record, `true` iff it existed
    fn delete(&self, id: WordId) -> Result<bool>;

    /// All records, newest first
    fn list_all(&self) -> Result<Vec<Word>>;

    /// Records due at `now`, earliest-due first
    fn due_for_review(&self, now: DateTime<Utc>) -> Result<Vec<Word>>;

    /// Schedule a review and persist the result in one step
    fn apply_review(
        &self,
        id: WordId,
        outcome: ReviewOutcome,
        now: DateTime<Utc>,
    ) -> Result<Option<Word>>;

    /// All records in insertion order
    fn snapshot(&self) -> Result<Vec<Word>>;
}
