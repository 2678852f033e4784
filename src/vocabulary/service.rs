//! Vocabulary service: a word store bound to a clock

use std::io::Write;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::algorithm::preview_intervals;
use super::clock::{Clock, SystemClock};
use super::export::{write_csv, ExportError};
use super::models::{NewWord, ReviewOutcome, Word, WordId, WordUpdate};
use super::queue::matches_query;
use super::stats::VocabularyStats;
use super::storage::{Result, WordStore};

/// Entry point used by the CLI and the HTTP layer
///
/// Reads the clock once per operation so a single call never sees time move.
#[derive(Clone)]
pub struct Vocabulary {
    store: Arc<dyn WordStore>,
    clock: Arc<dyn Clock>,
}

impl Vocabulary {
    pub fn new(store: Arc<dyn WordStore>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    pub fn with_clock(store: Arc<dyn WordStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn add_word(&self, new_word: NewWord) -> Result<Word> {
        let word = self.store.create(new_word, self.now())?;
        log::info!("Added word {} '{}'", word.id, word.text);
        Ok(word)
    }

    pub fn get_word(&self, id: WordId) -> Result<Option<Word>> {
        self.store.get(id)
    }

    pub fn update_word(&self, id: WordId, update: WordUpdate) -> Result<Option<Word>> {
        let updated = self.store.update(id, update)?;
        match &updated {
            Some(word) => log::info!("Updated word {} '{}'", word.id, word.text),
            None => log::debug!("Update skipped, word {} not found", id),
        }
        Ok(updated)
    }

    pub fn delete_word(&self, id: WordId) -> Result<bool> {
        let deleted = self.store.delete(id)?;
        if deleted {
            log::info!("Deleted word {}", id);
        }
        Ok(deleted)
    }

    pub fn list_words(&self) -> Result<Vec<Word>> {
        self.store.list_all()
    }

    /// Words whose text or meaning contains `query`, newest first
    pub fn search_words(&self, query: &str) -> Result<Vec<Word>> {
        let words = self.store.list_all()?;
        Ok(words.into_iter().filter(|w| matches_query(w, query)).collect())
    }

    pub fn due_words(&self) -> Result<Vec<Word>> {
        let now = self.now();
        let due = self.store.due_for_review(now)?;
        log::debug!("{} words due at {}", due.len(), now.to_rfc3339());
        Ok(due)
    }

    /// Record a review for a word
    pub fn review(&self, id: WordId, outcome: ReviewOutcome) -> Result<Option<Word>> {
        let reviewed = self.store.apply_review(id, outcome, self.now())?;
        match &reviewed {
            Some(word) => log::info!(
                "Reviewed word {} as {}: difficulty {}, next review {}",
                word.id,
                outcome,
                word.difficulty,
                word.next_review.to_rfc3339()
            ),
            None => log::debug!("Review skipped, word {} not found", id),
        }
        Ok(reviewed)
    }

    /// Next review instant each outcome would schedule for a word
    pub fn preview(&self, id: WordId) -> Result<Option<[(ReviewOutcome, DateTime<Utc>); 4]>> {
        let now = self.now();
        Ok(self.store.get(id)?.map(|word| preview_intervals(&word, now)))
    }

    pub fn stats(&self) -> Result<VocabularyStats> {
        let words = self.store.snapshot()?;
        Ok(VocabularyStats::compute(&words, self.now()))
    }

    /// Export every word as CSV, newest first
    pub fn export_csv<W: Write>(&self, writer: W) -> std::result::Result<usize, ExportError> {
        let words = self.store.list_all()?;
        write_csv(&words, writer)?;
        log::info!("Exported {} words", words.len());
        Ok(words.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::clock::ManualClock;
    use crate::vocabulary::storage::MemoryWordStore;
    use chrono::{Duration, TimeZone};

    fn setup() -> (Vocabulary, Arc<ManualClock>) {
        let start = Utc.with_ymd_and_hms(2026, 10, 1, 9, 0, 0).unwrap();
        let clock = Arc::new(ManualClock::new(start));
        let vocabulary = Vocabulary::with_clock(Arc::new(MemoryWordStore::new()), clock.clone());
        (vocabulary, clock)
    }

    #[test]
    fn test_review_session() {
        let (vocabulary, clock) = setup();
        let start = clock.now();
        let word = vocabulary.add_word(NewWord::new("apfel", "apple")).unwrap();
        assert_eq!(vocabulary.due_words().unwrap().len(), 1);

        let reviewed = vocabulary.review(word.id, ReviewOutcome::Good).unwrap().unwrap();
        assert_eq!(reviewed.difficulty, 1);
        assert_eq!(reviewed.next_review, start + Duration::days(1));
        assert!(vocabulary.due_words().unwrap().is_empty());

        clock.advance(Duration::days(1));
        let due = vocabulary.due_words().unwrap();
        assert_eq!(due.len(), 1);

        let again = vocabulary.review(word.id, ReviewOutcome::Good).unwrap().unwrap();
        assert_eq!(again.difficulty, 2);
        assert_eq!(again.next_review, clock.now() + Duration::days(3));
    }

    #[test]
    fn test_review_unknown_word() {
        let (vocabulary, _clock) = setup();
        assert!(vocabulary.review(WordId(1), ReviewOutcome::Easy).unwrap().is_none());
        assert!(vocabulary.preview(WordId(1)).unwrap().is_none());
    }

    #[test]
    fn test_search_words() {
        let (vocabulary, clock) = setup();
        vocabulary.add_word(NewWord::new("Mond", "moon")).unwrap();
        clock.advance(Duration::seconds(1));
        vocabulary.add_word(NewWord::new("Sonne", "sun")).unwrap();
        clock.advance(Duration::seconds(1));
        vocabulary.add_word(NewWord::new("Sonntag", "Sunday")).unwrap();

        let texts: Vec<String> = vocabulary
            .search_words("SUN")
            .unwrap()
            .into_iter()
            .map(|w| w.text)
            .collect();
        assert_eq!(texts, vec!["Sonntag", "Sonne"]);
        assert_eq!(vocabulary.search_words("").unwrap().len(), 3);
    }

    #[test]
    fn test_stats_follow_reviews() {
        let (vocabulary, _clock) = setup();
        let a = vocabulary.add_word(NewWord::new("a", "1")).unwrap();
        vocabulary.add_word(NewWord::new("b", "2")).unwrap();

        vocabulary.review(a.id, ReviewOutcome::Easy).unwrap();
        vocabulary.review(a.id, ReviewOutcome::Good).unwrap();

        let stats = vocabulary.stats().unwrap();
        assert_eq!(stats.total_words, 2);
        assert_eq!(stats.mastered_words, 1);
        assert_eq!(stats.new_words, 1);
        assert_eq!(stats.reviewing_words, 0);
        assert_eq!(stats.words_for_review, 1);
        assert_eq!(stats.accuracy, Some(1.0));
    }

    #[test]
    fn test_export_csv() {
        let (vocabulary, _clock) = setup();
        vocabulary.add_word(NewWord::new("uno", "one")).unwrap();
        vocabulary.add_word(NewWord::new("dos", "two")).unwrap();

        let mut buf = Vec::new();
        let count = vocabulary.export_csv(&mut buf).unwrap();
        assert_eq!(count, 2);
        assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 3);
    }
}
