use anyhow::{bail, Context, Result};

use lexicon_lib::vocabulary::WordId;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, id: WordId, format: &OutputFormat) -> Result<()> {
    let deleted = app.vocabulary.delete_word(id).context("Failed to delete word")?;
    if !deleted {
        bail!("No word with id {}", id);
    }

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({ "id": id, "deleted": true });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => println!("Deleted word {}", id),
    }

    Ok(())
}
