use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};

use super::{Result, StoreError, WordCollection, WordStore};
use crate::vocabulary::models::{NewWord, ReviewOutcome, Word, WordId, WordUpdate};

/// Process-local word store
#[derive(Debug, Default)]
pub struct MemoryWordStore {
    collection: RwLock<WordCollection>,
}

impl MemoryWordStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, WordCollection>> {
        self.collection.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, WordCollection>> {
        self.collection.write().map_err(|_| StoreError::LockPoisoned)
    }
}

impl WordStore for MemoryWordStore {
    fn create(&self, new_word: NewWord, now: DateTime<Utc>) -> Result<Word> {
        Ok(self.write()?.insert(new_word, now))
    }

    fn get(&self, id: WordId) -> Result<Option<Word>> {
        Ok(self.read()?.get(id).cloned())
    }

    fn update(&self, id: WordId, update: WordUpdate) -> Result<Option<Word>> {
        Ok(self.write()?.update(id, update))
    }

    fn delete(&self, id: WordId) -> Result<bool> {
        Ok(self.write()?.remove(id))
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
        Ok(self.write()?.review(id, outcome, now))
    }

    fn snapshot(&self) -> Result<Vec<Word>> {
        Ok(self.read()?.words().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use std::sync::Arc;
    use std::thread;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 14, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_create_and_get() {
        let store = MemoryWordStore::new();
        let mut new_word = NewWord::new("hola", "hello");
        new_word.pronunciation = Some("/ˈola/".to_string());

        let created = store.create(new_word.clone(), now()).unwrap();
        let fetched = store.get(created.id).unwrap().unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.text, new_word.text);
        assert_eq!(fetched.pronunciation, new_word.pronunciation);
        assert_eq!(fetched.next_review, now());
    }

    #[test]
    fn test_update_unknown_id_does_not_create() {
        let store = MemoryWordStore::new();
        let update = WordUpdate {
            text: Some("ghost".to_string()),
            ..Default::default()
        };
        assert!(store.update(WordId(9), update).unwrap().is_none());
        assert!(store.snapshot().unwrap().is_empty());
    }

    #[test]
    fn test_delete_twice() {
        let store = MemoryWordStore::new();
        let word = store.create(NewWord::new("gato", "cat"), now()).unwrap();

        assert!(store.delete(word.id).unwrap());
        assert!(!store.delete(word.id).unwrap());
        assert!(!store.delete(word.id).unwrap());
        assert!(store.get(word.id).unwrap().is_none());
        assert!(store.update(word.id, WordUpdate::default()).unwrap().is_none());
        assert!(store
            .apply_review(word.id, ReviewOutcome::Good, now())
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_list_all_newest_first() {
        let store = MemoryWordStore::new();
        store.create(NewWord::new("first", "1"), now()).unwrap();
        store
            .create(NewWord::new("second", "2"), now() + Duration::minutes(1))
            .unwrap();
        store
            .create(NewWord::new("third", "3"), now() + Duration::minutes(2))
            .unwrap();

        let texts: Vec<String> = store.list_all().unwrap().into_iter().map(|w| w.text).collect();
        assert_eq!(texts, vec!["third", "second", "first"]);
    }

    #[test]
    fn test_due_for_review_after_reviews() {
        let store = MemoryWordStore::new();
        let a = store.create(NewWord::new("a", "1"), now()).unwrap();
        let b = store.create(NewWord::new("b", "2"), now()).unwrap();
        let c = store.create(NewWord::new("c", "3"), now()).unwrap();

        store.apply_review(b.id, ReviewOutcome::Good, now()).unwrap();
        store.apply_review(a.id, ReviewOutcome::Again, now()).unwrap();

        // c was never reviewed, so it is still due at creation time
        let due_now: Vec<WordId> = store.due_for_review(now()).unwrap().iter().map(|w| w.id).collect();
        assert_eq!(due_now, vec![c.id]);

        let later = now() + Duration::minutes(2);
        let due_later: Vec<WordId> = store.due_for_review(later).unwrap().iter().map(|w| w.id).collect();
        assert_eq!(due_later, vec![c.id, a.id]);

        let next_day = now() + Duration::days(1);
        let due_next_day: Vec<WordId> =
            store.due_for_review(next_day).unwrap().iter().map(|w| w.id).collect();
        assert_eq!(due_next_day, vec![c.id, a.id, b.id]);
    }

    #[test]
    fn test_review_counts_monotonic() {
        let store = MemoryWordStore::new();
        let word = store.create(NewWord::new("perro", "dog"), now()).unwrap();

        let outcomes = [
            ReviewOutcome::Good,
            ReviewOutcome::Again,
            ReviewOutcome::Hard,
            ReviewOutcome::Easy,
        ];
        let mut previous = word;
        for outcome in outcomes {
            let next = store.apply_review(previous.id, outcome, now()).unwrap().unwrap();
            assert_eq!(next.review_count, previous.review_count + 1);
            let expected_correct = previous.correct_count + u32::from(outcome.is_correct());
            assert_eq!(next.correct_count, expected_correct);
            assert!(next.correct_count <= next.review_count);
            previous = next;
        }
    }

    #[test]
    fn test_concurrent_reviews_do_not_lose_updates() {
        let store = Arc::new(MemoryWordStore::new());
        let word = store.create(NewWord::new("casa", "house"), now()).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    let outcome = if i % 2 == 0 {
                        ReviewOutcome::Good
                    } else {
                        ReviewOutcome::Hard
                    };
                    for _ in 0..25 {
                        store.apply_review(word.id, outcome, now()).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let reviewed = store.get(word.id).unwrap().unwrap();
        assert_eq!(reviewed.review_count, 200);
        assert_eq!(reviewed.correct_count, 100);
    }
}
