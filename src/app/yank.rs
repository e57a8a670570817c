//! Clipboard text for the selected cell or row.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum YankError {
    #[error("Nothing selected")]
    NothingSelected,
    #[error("Failed to format row: {0}")]
    Format(#[from] csv::Error),
    #[error("Failed to finish row: {0}")]
    Flush(String),
    #[error("Row is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// One record, tab separated, quoted only where a cell contains a tab, quote or newline.
pub fn row_as_tsv(cells: &[String]) -> Result<String, YankError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(cells)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| YankError::Flush(e.error().to_string()))?;
    let mut text = String::from_utf8(bytes)?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}
