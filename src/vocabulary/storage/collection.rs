//! In-memory word collection shared by the store backends

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::vocabulary::algorithm::review_word;
use crate::vocabulary::models::{
    NewWord, ReviewOutcome, Word, WordId, WordUpdate, MAX_DIFFICULTY,
};
use crate::vocabulary::queue::{due_words, newest_first};

/// Words keyed by id, plus the id counter
///
/// Ids are handed out in increasing order, so iterating the map yields
/// insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordCollection {
    next_id: u64,
    #[serde(with = "word_list")]
    words: BTreeMap<WordId, Word>,
}

impl Default for WordCollection {
    fn default() -> Self {
        Self {
            next_id: 1,
            words: BTreeMap::new(),
        }
    }
}

impl WordCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn insert(&mut self, new_word: NewWord, now: DateTime<Utc>) -> Word {
        let id = WordId(self.next_id);
        self.next_id += 1;
        let word = Word::new(id, new_word, now);
        self.words.insert(id, word.clone());
        word
    }

    pub fn get(&self, id: WordId) -> Option<&Word> {
        self.words.get(&id)
    }

    pub fn update(&mut self, id: WordId, update: WordUpdate) -> Option<Word> {
        let word = self.words.get_mut(&id)?;
        word.apply_update(update);
        Some(word.clone())
    }

    pub fn remove(&mut self, id: WordId) -> bool {
        self.words.remove(&id).is_some()
    }

    pub fn review(&mut self, id: WordId, outcome: ReviewOutcome, now: DateTime<Utc>) -> Option<Word> {
        let word = self.words.get_mut(&id)?;
        *word = review_word(word, outcome, now);
        Some(word.clone())
    }

    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.words.values()
    }

    pub fn newest_first(&self) -> Vec<Word> {
        newest_first(self.words.values())
    }

    pub fn due(&self, now: DateTime<Utc>) -> Vec<Word> {
        due_words(self.words.values(), now)
    }

    /// Repair a loaded collection
    ///
    /// Moves the counter past every stored id, clamps tiers to
    /// `MAX_DIFFICULTY` and caps `correct_count` at `review_count`.
    pub(crate) fn normalize(mut self) -> Self {
        for word in self.words.values_mut() {
            if word.difficulty > MAX_DIFFICULTY {
                log::warn!(
                    "Word {} has difficulty {}, clamping to {}",
                    word.id,
                    word.difficulty,
                    MAX_DIFFICULTY
                );
                word.difficulty = MAX_DIFFICULTY;
            }
            if word.correct_count > word.review_count {
                log::warn!(
                    "Word {} has {} correct of {} reviews, capping",
                    word.id,
                    word.correct_count,
                    word.review_count
                );
                word.correct_count = word.review_count;
            }
        }

        let max_id = self.words.keys().next_back().map_or(0, |id| id.0);
        if self.next_id <= max_id {
            log::warn!(
                "Word id counter {} behind stored id {}, advancing",
                self.next_id,
                max_id
            );
            self.next_id = max_id + 1;
        }
        self
    }
}

/// Stores the map as a plain array of words
mod word_list {
    use std::collections::BTreeMap;

    use serde::{Deserialize, Deserializer, Serializer};

    use crate::vocabulary::models::{Word, WordId};

    pub fn serialize<S>(words: &BTreeMap<WordId, Word>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(words.values())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeMap<WordId, Word>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let words = Vec::<Word>::deserialize(deserializer)?;
        Ok(words.into_iter().map(|w| (w.id, w)).collect())
    }
}
