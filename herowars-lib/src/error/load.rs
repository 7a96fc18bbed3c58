//! LoadError for dataset parsing

/// Error type for loading a hero dataset.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The dataset is not a valid JSON array of records.
    #[error("invalid JSON dataset: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading the dataset failed.
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// A CSV row has the wrong number of fields.
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A numeric CSV cell could not be parsed.
    #[error("line {line}: column '{column}' is not a number: '{value}'")]
    InvalidNumber {
        line: usize,
        column: &'static str,
        value: String,
    },

    /// A quoted CSV field was never closed.
    #[error("line {line}: unterminated quoted field")]
    UnterminatedQuote { line: usize },
}
