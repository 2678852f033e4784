use anyhow::{bail, Context, Result};

use lexicon_lib::vocabulary::{WordId, WordUpdate};

use crate::app::App;
use crate::OutputFormat;

/// Content flags from the command line
pub struct EditArgs {
    pub text: Option<String>,
    pub meaning: Option<String>,
    pub pronunciation: Option<String>,
    pub example: Option<String>,
    pub translation: Option<String>,
}

impl EditArgs {
    fn into_update(self) -> Result<WordUpdate> {
        let required = |name: &str, value: Option<String>| -> Result<Option<String>> {
            match value.map(|v| v.trim().to_string()) {
                Some(v) if v.is_empty() => bail!("{} must not be empty", name),
                other => Ok(other),
            }
        };
        // Empty string clears an optional field
        let optional = |value: Option<String>| {
            value.map(|v| {
                let v = v.trim().to_string();
                if v.is_empty() { None } else { Some(v) }
            })
        };

        Ok(WordUpdate {
            text: required("Text", self.text)?,
            meaning: required("Meaning", self.meaning)?,
            pronunciation: optional(self.pronunciation),
            example: optional(self.example),
            translation: optional(self.translation),
        })
    }
}

pub fn run(app: &App, id: WordId, args: EditArgs, format: &OutputFormat) -> Result<()> {
    let update = args.into_update()?;
    if update.is_empty() {
        bail!("Nothing to change. Pass at least one of --text, --meaning, --pronunciation, --example, --translation");
    }

    let word = app
        .vocabulary
        .update_word(id, update)
        .context("Failed to update word")?
        .with_context(|| format!("No word with id {}", id))?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&word)?),
        OutputFormat::Plain => println!("Updated \"{}\" (ID {})", word.text, word.id),
    }

    Ok(())
}
