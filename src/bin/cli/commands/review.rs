use anyhow::{Context, Result};

use lexicon_lib::vocabulary::algorithm::format_next_review;
use lexicon_lib::vocabulary::{ReviewOutcome, WordId};

use crate::app::App;
use crate::render::terminal::mastery_badge;
use crate::OutputFormat;

pub fn run(
    app: &App,
    id: WordId,
    outcome: ReviewOutcome,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let word = app
        .vocabulary
        .review(id, outcome)
        .context("Failed to record review")?
        .with_context(|| format!("No word with id {}", id))?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&word)?),
        OutputFormat::Plain => {
            println!(
                "\"{}\" marked {}: now {}",
                word.text,
                outcome,
                mastery_badge(&word, use_color)
            );
            println!(
                "  Next review: {}",
                format_next_review(word.next_review, app.vocabulary.now())
            );
        }
    }

    Ok(())
}
