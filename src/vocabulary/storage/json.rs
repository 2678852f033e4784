//! JSON file backend
//!
//! File layout:
//! ```text
//! {data_dir}/
//! └── words.json   # {"nextId": n, "words": [...]}
//! ```
//!
//! The collection is cached in memory. Mutations run against a copy which is
//! written to `words.json.tmp` and renamed over `words.json`; the cache is
//! only replaced once the rename succeeds.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};

use super::{Result, StoreError, WordCollection, WordStore};
use crate::vocabulary::models::{NewWord, ReviewOutcome, Word, WordId, WordUpdate};

pub const DEFAULT_FILE_NAME: &str = "words.json";

/// Word store persisted to a single JSON document
pub struct JsonWordStore {
    path: PathBuf,
    collection: RwLock<WordCollection>,
}

impl JsonWordStore {
    /// Open the store at `path`, creating an empty document if none exists
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let collection = if path.exists() {
            let content = fs::read_to_string(&path)?;
            let collection: WordCollection = serde_json::from_str(&content)?;
            log::info!("Loaded {} words from {:?}", collection.len(), path);
            collection.normalize()
        } else {
            let collection = WordCollection::new();
            write_document(&path, &collection)?;
            log::info!("Created word store at {:?}", path);
            collection
        };

        Ok(Self {
            path,
            collection: RwLock::new(collection),
        })
    }

    /// Open `words.json` inside a data directory
    pub fn open_in(data_dir: &Path) -> Result<Self> {
        Self::open(data_dir.join(DEFAULT_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, WordCollection>> {
        self.collection.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, WordCollection>> {
        self.collection.write().map_err(|_| StoreError::LockPoisoned)
    }

    /// Run `f` on a copy of the collection and commit it if `f` changed
    /// something (returned `Some`)
    fn mutate<T>(&self, f: impl FnOnce(&mut WordCollection) -> Option<T>) -> Result<Option<T>> {
        let mut guard = self.write()?;
        let mut next = guard.clone();
        let Some(out) = f(&mut next) else {
            return Ok(None);
        };
        write_document(&self.path, &next)?;
        *guard = next;
        Ok(Some(out))
    }
}

fn write_document(path: &Path, collection: &WordCollection) -> Result<()> {
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, serde_json::to_string_pretty(collection)?)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

impl WordStore for JsonWordStore {
    fn create(&self, new_word: NewWord, now: DateTime<Utc>) -> Result<Word> {
        let mut guard = self.write()?;
        let mut next = guard.clone();
        let word = next.insert(new_word, now);
        write_document(&self.path, &next)?;
        *guard = next;
        Ok(word)
    }

    fn get(&self, id: WordId) -> Result<Option<Word>> {
        Ok(self.read()?.get(id).cloned())
    }

    fn update(&self, id: WordId, update: WordUpdate) -> Result<Option<Word>> {
        self.mutate(|c| c.update(id, update))
    }

    fn delete(&self, id: WordId) -> Result<bool> {
        let removed = self.mutate(|c| c.remove(id).then_some(()))?;
        Ok(removed.is_some())
    }

    fn list_all(&self) -> Result<Vec<Word>> {
        Ok(self.read()?.newest_first())
    }

    fn due_for_review(&self, now: DateTime<Utc>) -> Result<Vec<Word>> {
        Ok(self.read()?.due(now))
    }

    fn apply_review(
        &self,
        id: WordId,
        outcome: ReviewOutcome,
        now: DateTime<Utc>,
    ) -> Result<Option<Word>> {
        self.mutate(|c| c.review(id, outcome, now))
    }

    fn snapshot(&self) -> Result<Vec<Word>> {
        Ok(self.read()?.words().cloned().collect())
    }
}
