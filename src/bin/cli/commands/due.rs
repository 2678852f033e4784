use anyhow::{Context, Result};

use crate::app::App;
use crate::render::terminal::render_word_table;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let due = app.vocabulary.due_words().context("Failed to load review queue")?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&due)?),
        OutputFormat::Plain => {
            if due.is_empty() {
                println!("Nothing due. Come back later.");
                return Ok(());
            }
            println!("{}", render_word_table(&due, app.vocabulary.now(), use_color));
            println!();
            println!("{} due for review", due.len());
        }
    }

    Ok(())
}
