use anyhow::{Context, Result};

use crate::app::App;
use crate::render::terminal::render_word_table;
use crate::OutputFormat;

pub fn run(app: &App, search: Option<&str>, format: &OutputFormat, use_color: bool) -> Result<()> {
    let words = match search {
        Some(query) => app.vocabulary.search_words(query),
        None => app.vocabulary.list_words(),
    }
    .context("Failed to list words")?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&words)?),
        OutputFormat::Plain => {
            if words.is_empty() {
                match search {
                    Some(query) => println!("No words matching '{}'.", query),
                    None => println!("No words yet. Add one with `lexicon-cli add <text> <meaning>`."),
                }
                return Ok(());
            }
            println!("{}", render_word_table(&words, app.vocabulary.now(), use_color));
            println!();
            println!("{} word{}", words.len(), if words.len() == 1 { "" } else { "s" });
        }
    }

    Ok(())
}
