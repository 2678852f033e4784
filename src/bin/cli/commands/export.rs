use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};

use crate::app::App;

pub fn run(app: &App, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let count = app
                .vocabulary
                .export_csv(BufWriter::new(file))
                .context("Failed to export words")?;
            eprintln!("Exported {} words to {}", count, path.display());
        }
        None => {
            app.vocabulary
                .export_csv(io::stdout().lock())
                .context("Failed to export words")?;
        }
    }

    Ok(())
}
