//! Review queue selection

use chrono::{DateTime, Utc};

use super::models::Word;

/// Words due at `now`, earliest-due first
///
/// `words` must be in insertion order; equal `next_review` values keep that
/// order since the sort is stable.
pub fn due_words<'a, I>(words: I, now: DateTime<Utc>) -> Vec<Word>
where
    I: IntoIterator<Item = &'a Word>,
{
    let mut due: Vec<Word> = words
        .into_iter()
        .filter(|w| w.is_due(now))
        .cloned()
        .collect();
    due.sort_by(|a, b| a.next_review.cmp(&b.next_review));
    due
}

/// Newest first, for general listing
pub fn newest_first<'a, I>(words: I) -> Vec<Word>
where
    I: IntoIterator<Item = &'a Word>,
{
    let mut listed: Vec<Word> = words.into_iter().cloned().collect();
    listed.sort_by(|a, b| b.added_at.cmp(&a.added_at));
    listed
}

/// Case-insensitive substring match on text or meaning
pub fn matches_query(word: &Word, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    query.is_empty()
        || word.text.to_lowercase().contains(&query)
        || word.meaning.to_lowercase().contains(&query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::models::{NewWord, WordId};
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 10, 12, 0, 0).unwrap()
    }

    fn word(id: u64, text: &str, next_review: DateTime<Utc>) -> Word {
        let mut word = Word::new(WordId(id), NewWord::new(text, "meaning"), now());
        word.next_review = next_review;
        word
    }

    #[test]
    fn test_due_words_filters_and_sorts() {
        let words = vec![
            word(1, "later", now() + Duration::minutes(1)),
            word(2, "recent", now() - Duration::minutes(5)),
            word(3, "exact", now()),
            word(4, "oldest", now() - Duration::days(2)),
        ];

        let due = due_words(&words, now());
        let texts: Vec<&str> = due.iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, vec!["oldest", "recent", "exact"]);
    }

    #[test]
    fn test_due_words_ties_keep_insertion_order() {
        let at = now() - Duration::hours(1);
        let words = vec![word(1, "a", at), word(2, "b", at), word(3, "c", at)];

        let due = due_words(&words, now());
        let ids: Vec<u64> = due.iter().map(|w| w.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_due_words_is_idempotent() {
        let words = vec![
            word(1, "a", now() - Duration::minutes(3)),
            word(2, "b", now() + Duration::days(1)),
        ];
        assert_eq!(due_words(&words, now()), due_words(&words, now()));
    }

    #[test]
    fn test_newest_first() {
        let mut older = word(1, "older", now());
        older.added_at = now() - Duration::days(1);
        let newer = word(2, "newer", now());

        let listed = newest_first(&[older, newer]);
        assert_eq!(listed[0].text, "newer");
        assert_eq!(listed[1].text, "older");
    }

    #[test]
    fn test_matches_query() {
        let w = Word::new(WordId(1), NewWord::new("Serendipity", "a Happy accident"), now());
        assert!(matches_query(&w, "seren"));
        assert!(matches_query(&w, "HAPPY"));
        assert!(matches_query(&w, "  "));
        assert!(!matches_query(&w, "sad"));
    }
}
