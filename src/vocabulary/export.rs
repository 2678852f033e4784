//! CSV export of the vocabulary notebook

use std::io::Write;

use thiserror::Error;

use super::models::Word;
use super::storage::StoreError;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

const HEADER: [&str; 8] = [
    "Text",
    "Pronunciation",
    "Meaning",
    "Example",
    "Difficulty",
    "Review Count",
    "Correct Count",
    "Added Date",
];

/// Write words as CSV, one row per word in the given order
pub fn write_csv<W: Write>(words: &[Word], writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADER)?;

    for word in words {
        let difficulty = word.difficulty.to_string();
        let review_count = word.review_count.to_string();
        let correct_count = word.correct_count.to_string();
        let added_at = word.added_at.to_rfc3339();

        csv_writer.write_record([
            word.text.as_str(),
            word.pronunciation.as_deref().unwrap_or(""),
            word.meaning.as_str(),
            word.example.as_deref().unwrap_or(""),
            difficulty.as_str(),
            review_count.as_str(),
            correct_count.as_str(),
            added_at.as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Render words to a CSV string
pub fn to_csv_string(words: &[Word]) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    write_csv(words, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
