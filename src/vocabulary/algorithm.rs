//! Fixed-tier review scheduler
//!
//! Each word carries a difficulty tier from 0 (new) to 4 (mastered). A review
//! outcome moves the tier and picks the next review instant from a small
//! table keyed on the tier *before* the move:
//!
//! | outcome | tier change | interval                                    |
//! |---------|-------------|---------------------------------------------|
//! | again   | -1          | 1 minute                                    |
//! | hard    | 0           | 6 minutes                                   |
//! | good    | +1          | 1d, 3d, 7d, then `min(30, tier * 7)` days   |
//! | easy    | +2          | 4d, 7d, 14d, then `min(90, tier * 14)` days |
//!
//! Tiers are clamped to `0..=4`.

use chrono::{DateTime, Duration, Utc};

use super::models::{ReviewOutcome, Word, MAX_DIFFICULTY};

/// Longest interval a "good" answer can schedule
const MAX_GOOD_INTERVAL_DAYS: i64 = 30;

/// Longest interval an "easy" answer can schedule
const MAX_EASY_INTERVAL_DAYS: i64 = 90;

/// Result of scheduling a single review
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewResult {
    pub new_difficulty: u8,
    pub next_review: DateTime<Utc>,
}

/// Compute the new tier and next review instant for a word
pub fn compute_review(word: &Word, outcome: ReviewOutcome, now: DateTime<Utc>) -> ReviewResult {
    ReviewResult {
        new_difficulty: next_difficulty(word.difficulty, outcome),
        next_review: now + review_interval(word.difficulty, outcome),
    }
}

/// Tier after a review
pub fn next_difficulty(difficulty: u8, outcome: ReviewOutcome) -> u8 {
    let difficulty = difficulty.min(MAX_DIFFICULTY);
    match outcome {
        ReviewOutcome::Again => difficulty.saturating_sub(1),
        ReviewOutcome::Hard => difficulty,
        ReviewOutcome::Good => (difficulty + 1).min(MAX_DIFFICULTY),
        ReviewOutcome::Easy => (difficulty + 2).min(MAX_DIFFICULTY),
    }
}

/// Time until the next review, from the pre-review tier
pub fn review_interval(difficulty: u8, outcome: ReviewOutcome) -> Duration {
    let tier = i64::from(difficulty);
    match outcome {
        ReviewOutcome::Again => Duration::minutes(1),
        ReviewOutcome::Hard => Duration::minutes(6),
        ReviewOutcome::Good => Duration::days(match difficulty {
            0 => 1,
            1 => 3,
            2 => 7,
            _ => (tier * 7).min(MAX_GOOD_INTERVAL_DAYS),
        }),
        ReviewOutcome::Easy => Duration::days(match difficulty {
            0 => 4,
            1 => 7,
            2 => 14,
            _ => (tier * 14).min(MAX_EASY_INTERVAL_DAYS),
        }),
    }
}

/// Apply a review to a word, returning the updated record
///
/// All scheduling fields change together: tier, counters, `last_reviewed`
/// and `next_review`.
pub fn review_word(word: &Word, outcome: ReviewOutcome, now: DateTime<Utc>) -> Word {
    let ReviewResult {
        new_difficulty,
        next_review,
    } = compute_review(word, outcome, now);

    let mut updated = word.clone();
    updated.difficulty = new_difficulty;
    updated.next_review = next_review;
    updated.review_count = word.review_count.saturating_add(1);
    if outcome.is_correct() {
        updated.correct_count = word.correct_count.saturating_add(1);
    }
    updated.last_reviewed = Some(now);
    updated
}

/// Next review instant each outcome would give, in again/hard/good/easy order
pub fn preview_intervals(word: &Word, now: DateTime<Utc>) -> [(ReviewOutcome, DateTime<Utc>); 4] {
    ReviewOutcome::ALL.map(|outcome| (outcome, compute_review(word, outcome, now).next_review))
}

/// Format a next review instant relative to `now`
pub fn format_next_review(next_review: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = next_review - now;
    if diff <= Duration::zero() {
        "now".to_string()
    } else if diff < Duration::hours(1) {
        format!("in {}m", diff.num_minutes().max(1))
    } else if diff < Duration::days(1) {
        format!("in {}h", diff.num_hours())
    } else if diff.num_days() == 1 {
        "tomorrow".to_string()
    } else if diff.num_days() < 7 {
        format!("in {}d", diff.num_days())
    } else {
        next_review.format("%Y-%m-%d").to_string()
    }
}
