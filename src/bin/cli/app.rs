use std::path::Path;

use anyhow::{Context, Result};

use lexicon_lib::vocabulary::{Word, WordId};
use lexicon_lib::{AppConfig, Vocabulary};

/// Shared application state for CLI commands
pub struct App {
    pub config: AppConfig,
    pub vocabulary: Vocabulary,
}

impl App {
    /// Load config and open the configured word store
    pub fn new(config_path: Option<&Path>) -> Result<Self> {
        let config = AppConfig::load(config_path).context("Failed to load configuration")?;
        let store = config.open_store().context("Failed to open word store")?;

        Ok(Self {
            config,
            vocabulary: Vocabulary::new(store),
        })
    }

    /// Fetch a word or fail with a not-found message
    pub fn find_word(&self, id: WordId) -> Result<Word> {
        self.vocabulary
            .get_word(id)
            .context("Failed to read word")?
            .with_context(|| format!("No word with id {}", id))
    }
}
