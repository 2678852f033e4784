//! Vocabulary notebook and spaced repetition for Lexicon
//!
//! This module provides:
//! - Word records with mastery state
//! - The fixed-tier review scheduler
//! - Due-word selection and statistics
//! - Word storage backends (memory, JSON file)
//! - CSV export

pub mod algorithm;
pub mod clock;
pub mod export;
pub mod models;
pub mod queue;
pub mod service;
pub mod stats;
pub mod storage;

pub use clock::{Clock, ManualClock, SystemClock};
pub use models::*;
pub use service::Vocabulary;
pub use stats::VocabularyStats;
pub use storage::{JsonWordStore, MemoryWordStore, StoreError, WordStore};
