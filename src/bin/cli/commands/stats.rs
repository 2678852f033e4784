use anyhow::{Context, Result};

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat) -> Result<()> {
    let stats = app.vocabulary.stats().context("Failed to compute statistics")?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
        OutputFormat::Plain => {
            println!("Total words:      {}", stats.total_words);
            println!("New:              {}", stats.new_words);
            println!("Reviewing:        {}", stats.reviewing_words);
            println!("Mastered:         {}", stats.mastered_words);
            println!("Due for review:   {}", stats.words_for_review);
            if let Some(accuracy) = stats.accuracy {
                println!("Accuracy:         {:.0}%", accuracy * 100.0);
            }
        }
    }

    Ok(())
}
