use anyhow::{bail, Context, Result};

use lexicon_lib::vocabulary::NewWord;

use crate::app::App;
use crate::render::terminal::mastery_badge;
use crate::OutputFormat;

#[allow(clippy::too_many_arguments)]
pub fn run(
    app: &App,
    text: String,
    meaning: String,
    pronunciation: Option<String>,
    example: Option<String>,
    translation: Option<String>,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    if text.trim().is_empty() || meaning.trim().is_empty() {
        bail!("Word text and meaning must not be empty");
    }

    let new_word = NewWord {
        text: text.trim().to_string(),
        meaning: meaning.trim().to_string(),
        pronunciation: non_empty(pronunciation),
        example: non_empty(example),
        translation: non_empty(translation),
    };

    let word = app.vocabulary.add_word(new_word).context("Failed to add word")?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&word)?),
        OutputFormat::Plain => {
            println!("Added \"{}\" ({})", word.text, mastery_badge(&word, use_color));
            println!("  ID: {}", word.id);
            println!("  Due for review now");
        }
    }

    Ok(())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
