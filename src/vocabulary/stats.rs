//! Aggregate statistics over a word collection

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::models::{Word, MASTERED_DIFFICULTY};

/// Statistics for the whole notebook, recomputed from a snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyStats {
    pub total_words: usize,
    pub mastered_words: usize,
    pub reviewing_words: usize,
    pub new_words: usize,
    pub words_for_review: usize,
    /// Correct answers over all reviews, `None` before any review
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
}

impl VocabularyStats {
    pub fn compute<'a, I>(words: I, now: DateTime<Utc>) -> Self
    where
        I: IntoIterator<Item = &'a Word>,
    {
        let mut stats = VocabularyStats::default();
        let mut reviews: u64 = 0;
        let mut correct: u64 = 0;

        for word in words {
            stats.total_words += 1;
            if word.difficulty >= MASTERED_DIFFICULTY {
                stats.mastered_words += 1;
            } else if word.review_count > 0 {
                stats.reviewing_words += 1;
            }
            if word.review_count == 0 {
                stats.new_words += 1;
            }
            if word.is_due(now) {
                stats.words_for_review += 1;
            }
            reviews += u64::from(word.review_count);
            correct += u64::from(word.correct_count);
        }

        if reviews > 0 {
            stats.accuracy = Some(correct as f64 / reviews as f64);
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::models::{NewWord, WordId};
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 7, 4, 8, 30, 0).unwrap()
    }

    fn word(id: u64, difficulty: u8, reviews: u32, correct: u32, due_in: Duration) -> Word {
        let mut word = Word::new(WordId(id), NewWord::new("w", "m"), now());
        word.difficulty = difficulty;
        word.review_count = reviews;
        word.correct_count = correct;
        word.next_review = now() + due_in;
        word
    }

    #[test]
    fn test_empty_collection() {
        let words: Vec<Word> = Vec::new();
        let stats = VocabularyStats::compute(&words, now());
        assert_eq!(stats, VocabularyStats::default());
    }

    #[test]
    fn test_counts() {
        let words = vec![
            word(1, 0, 0, 0, Duration::zero()),
            word(2, 1, 2, 1, Duration::days(3)),
            word(3, 3, 5, 4, Duration::days(7)),
            word(4, 4, 6, 6, -Duration::minutes(1)),
            word(5, 0, 1, 0, Duration::minutes(1)),
        ];

        let stats = VocabularyStats::compute(&words, now());
        assert_eq!(stats.total_words, 5);
        assert_eq!(stats.mastered_words, 2);
        assert_eq!(stats.reviewing_words, 2);
        assert_eq!(stats.new_words, 1);
        assert_eq!(stats.words_for_review, 2);
        assert_eq!(stats.accuracy, Some(11.0 / 14.0));
    }

    #[test]
    fn test_mastered_without_reviews_counts_as_new_too() {
        // The categories are independent filters, not a partition
        let words = vec![word(1, 3, 0, 0, Duration::days(1))];
        let stats = VocabularyStats::compute(&words, now());
        assert_eq!(stats.mastered_words, 1);
        assert_eq!(stats.new_words, 1);
        assert_eq!(stats.reviewing_words, 0);
    }
}
