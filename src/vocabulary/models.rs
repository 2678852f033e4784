//! Data models for the vocabulary notebook

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Highest difficulty tier a word can reach
pub const MAX_DIFFICULTY: u8 = 4;

/// Words at or above this tier count as mastered
pub const MASTERED_DIFFICULTY: u8 = 3;

/// Stable identifier of a word, never reused after deletion
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordId(pub u64);

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for WordId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(WordId)
    }
}

/// A vocabulary entry with its learning state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub id: WordId,
    pub text: String,
    pub meaning: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    /// Tier in `0..=4`, 0 is brand new or just missed
    #[serde(default)]
    pub difficulty: u8,
    #[serde(default)]
    pub review_count: u32,
    /// Reviews answered "good" or "easy"
    #[serde(default)]
    pub correct_count: u32,
    pub next_review: DateTime<Utc>,
    pub added_at: DateTime<Utc>,
    #[serde(default)]
    pub last_reviewed: Option<DateTime<Utc>>,
}

impl Word {
    /// Build a fresh record with the scheduling defaults, due immediately
    pub fn new(id: WordId, new_word: NewWord, now: DateTime<Utc>) -> Self {
        Self {
            id,
            text: new_word.text,
            meaning: new_word.meaning,
            pronunciation: new_word.pronunciation,
            example: new_word.example,
            translation: new_word.translation,
            difficulty: 0,
            review_count: 0,
            correct_count: 0,
            next_review: now,
            added_at: now,
            last_reviewed: None,
        }
    }

    /// Check if the word is due for review at `now`
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_review <= now
    }

    pub fn mastery_level(&self) -> MasteryLevel {
        MasteryLevel::from_difficulty(self.difficulty)
    }

    /// Share of reviews answered correctly, `None` before the first review
    pub fn accuracy(&self) -> Option<f64> {
        if self.review_count == 0 {
            None
        } else {
            Some(self.correct_count as f64 / self.review_count as f64)
        }
    }

    /// Merge a content edit into this record. Scheduling fields are untouched.
    pub fn apply_update(&mut self, update: WordUpdate) {
        if let Some(text) = update.text {
            self.text = text;
        }
        if let Some(meaning) = update.meaning {
            self.meaning = meaning;
        }
        if let Some(pronunciation) = update.pronunciation {
            self.pronunciation = pronunciation;
        }
        if let Some(example) = update.example {
            self.example = example;
        }
        if let Some(translation) = update.translation {
            self.translation = translation;
        }
    }
}

/// Content for a word being added to the notebook
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWord {
    pub text: String,
    pub meaning: String,
    #[serde(default)]
    pub pronunciation: Option<String>,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub translation: Option<String>,
}

impl NewWord {
    pub fn new(text: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            meaning: meaning.into(),
            ..Default::default()
        }
    }
}

/// Partial content edit for a word
///
/// For the optional fields the outer `Option` means "change this field" and
/// the inner one carries the new value, so `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
    pub pronunciation: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
    pub example: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
    pub translation: Option<Option<String>>,
}

impl WordUpdate {
    pub fn is_empty(&self) -> bool {
        self.text.is_none()
            && self.meaning.is_none()
            && self.pronunciation.is_none()
            && self.example.is_none()
            && self.translation.is_none()
    }
}

/// Distinguishes an absent JSON key from an explicit `null`
mod double_option {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(value: &Option<Option<String>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(inner) => inner.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer).map(Some)
    }
}

/// Self-reported recall difficulty for a review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewOutcome {
    /// Not recalled
    Again,
    /// Recalled with serious difficulty
    Hard,
    /// Recalled after hesitation
    Good,
    /// Recalled instantly
    Easy,
}

impl ReviewOutcome {
    pub const ALL: [ReviewOutcome; 4] = [
        ReviewOutcome::Again,
        ReviewOutcome::Hard,
        ReviewOutcome::Good,
        ReviewOutcome::Easy,
    ];

    /// Whether this outcome counts toward `correct_count`
    pub fn is_correct(self) -> bool {
        matches!(self, ReviewOutcome::Good | ReviewOutcome::Easy)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ReviewOutcome::Again => "again",
            ReviewOutcome::Hard => "hard",
            ReviewOutcome::Good => "good",
            ReviewOutcome::Easy => "easy",
        }
    }
}

impl fmt::Display for ReviewOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid review outcome '{0}', expected one of: again, hard, good, easy")]
pub struct InvalidOutcome(pub String);

impl FromStr for ReviewOutcome {
    type Err = InvalidOutcome;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "again" => Ok(ReviewOutcome::Again),
            "hard" => Ok(ReviewOutcome::Hard),
            "good" => Ok(ReviewOutcome::Good),
            "easy" => Ok(ReviewOutcome::Easy),
            _ => Err(InvalidOutcome(s.to_string())),
        }
    }
}

/// Display label for a difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MasteryLevel {
    New,
    Learning,
    Reviewing,
    Proficient,
    Mastered,
}

impl MasteryLevel {
    pub fn from_difficulty(difficulty: u8) -> Self {
        match difficulty {
            0 => MasteryLevel::New,
            1 => MasteryLevel::Learning,
            2 => MasteryLevel::Reviewing,
            3 => MasteryLevel::Proficient,
            _ => MasteryLevel::Mastered,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MasteryLevel::New => "New",
            MasteryLevel::Learning => "Learning",
            MasteryLevel::Reviewing => "Reviewing",
            MasteryLevel::Proficient => "Proficient",
            MasteryLevel::Mastered => "Mastered",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_update_keeps_untouched_fields_absent() {
        let update = WordUpdate {
            text: Some("x".to_string()),
            example: Some(None),
            ..Default::default()
        };

        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value, serde_json::json!({ "text": "x", "example": null }));

        let back: WordUpdate = serde_json::from_value(value).unwrap();
        assert_eq!(back, update);
        assert_eq!(back.pronunciation, None);
        assert_eq!(back.example, Some(None));
    }

    #[test]
    fn test_new_word_defaults() {
        let now = Utc::now();
        let word = Word::new(WordId(1), NewWord::new("serendipity", "happy accident"), now);

        assert_eq!(word.difficulty, 0);
        assert_eq!(word.review_count, 0);
        assert_eq!(word.correct_count, 0);
        assert_eq!(word.next_review, now);
        assert_eq!(word.added_at, now);
        assert!(word.last_reviewed.is_none());
        assert!(word.is_due(now));
        assert_eq!(word.accuracy(), None);
    }

    #[test]
    fn test_outcome_parsing() {
        assert_eq!("again".parse::<ReviewOutcome>(), Ok(ReviewOutcome::Again));
        assert_eq!(" Good ".parse::<ReviewOutcome>(), Ok(ReviewOutcome::Good));
        assert_eq!("EASY".parse::<ReviewOutcome>(), Ok(ReviewOutcome::Easy));
        assert_eq!(
            "perfect".parse::<ReviewOutcome>(),
            Err(InvalidOutcome("perfect".to_string()))
        );
    }

    #[test]
    fn test_outcome_serde_is_lowercase() {
        let json = serde_json::to_string(&ReviewOutcome::Hard).unwrap();
        assert_eq!(json, "\"hard\"");
        assert!(serde_json::from_str::<ReviewOutcome>("\"sometimes\"").is_err());
    }

    #[test]
    fn test_update_is_content_only() {
        let now = Utc::now();
        let mut word = Word::new(WordId(3), NewWord::new("ephemeral", "short-lived"), now);
        word.pronunciation = Some("/ɪˈfem(ə)rəl/".to_string());
        word.difficulty = 2;

        word.apply_update(WordUpdate {
            meaning: Some("lasting a very short time".to_string()),
            pronunciation: Some(None),
            ..Default::default()
        });

        assert_eq!(word.text, "ephemeral");
        assert_eq!(word.meaning, "lasting a very short time");
        assert!(word.pronunciation.is_none());
        assert_eq!(word.difficulty, 2);
    }

    #[test]
    fn test_update_deserialize_null_clears() {
        let update: WordUpdate =
            serde_json::from_str(r#"{"example": null, "text": "cat"}"#).unwrap();
        assert_eq!(update.text.as_deref(), Some("cat"));
        assert_eq!(update.example, Some(None));
        assert_eq!(update.pronunciation, None);
        assert!(!update.is_empty());
        assert!(WordUpdate::default().is_empty());
    }

    #[test]
    fn test_word_json_is_camel_case() {
        let now = Utc::now();
        let word = Word::new(WordId(7), NewWord::new("run", "to move fast"), now);
        let value = serde_json::to_value(&word).unwrap();

        assert_eq!(value["id"], 7);
        assert_eq!(value["reviewCount"], 0);
        assert!(value.get("nextReview").is_some());
        assert!(value.get("addedAt").is_some());
    }

    #[test]
    fn test_mastery_levels() {
        assert_eq!(MasteryLevel::from_difficulty(0), MasteryLevel::New);
        assert_eq!(MasteryLevel::from_difficulty(3), MasteryLevel::Proficient);
        assert_eq!(MasteryLevel::from_difficulty(4).label(), "Mastered");
    }
}
