use anyhow::{Context, Result};

use lexicon_lib::vocabulary::algorithm::format_next_review;
use lexicon_lib::vocabulary::WordId;

use crate::app::App;
use crate::render::terminal::{mastery_badge, paint, Color};
use crate::OutputFormat;

pub fn run(app: &App, id: WordId, format: &OutputFormat, use_color: bool) -> Result<()> {
    let word = app.find_word(id)?;
    let now = app.vocabulary.now();
    let preview = app
        .vocabulary
        .preview(id)
        .context("Failed to preview intervals")?
        .with_context(|| format!("No word with id {}", id))?;

    match format {
        OutputFormat::Json => {
            let intervals: serde_json::Map<String, serde_json::Value> = preview
                .iter()
                .map(|(outcome, at)| (outcome.to_string(), serde_json::json!(at.to_rfc3339())))
                .collect();
            let output = serde_json::json!({
                "word": word,
                "masteryLevel": word.mastery_level(),
                "accuracy": word.accuracy(),
                "preview": intervals,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("{}", paint(&word.text, Color::BOLD, use_color));
            if let Some(pronunciation) = &word.pronunciation {
                println!("  {}", paint(pronunciation, Color::DIM, use_color));
            }
            println!("  {}", word.meaning);
            if let Some(example) = &word.example {
                println!();
                println!("  {}", paint(example, Color::ITALIC, use_color));
                if let Some(translation) = &word.translation {
                    println!("  {}", paint(translation, Color::GRAY, use_color));
                }
            }
            println!();
            println!("  Level:        {} ({}/4)", mastery_badge(&word, use_color), word.difficulty);
            println!(
                "  Reviews:      {} ({} correct{})",
                word.review_count,
                word.correct_count,
                word.accuracy()
                    .map(|a| format!(", {:.0}%", a * 100.0))
                    .unwrap_or_default()
            );
            println!("  Next review:  {}", format_next_review(word.next_review, now));
            println!("  Added:        {}", word.added_at.format("%Y-%m-%d %H:%M"));
            if let Some(last) = word.last_reviewed {
                println!("  Last review:  {}", last.format("%Y-%m-%d %H:%M"));
            }
            println!();
            println!("  If reviewed now:");
            for (outcome, at) in &preview {
                println!("    {:<6} {}", outcome.as_str(), format_next_review(*at, now));
            }
        }
    }

    Ok(())
}
