//! Data error types.

use gesture_spi::ClassifyError;
use thiserror::Error;

/// Ingestion errors.
#[derive(Debug, Clone, Error)]
pub enum DataError {
    /// File could not be opened or read
    #[error("I/O error: {0}")]
    Io(String),

    /// Malformed CSV
    #[error("CSV error: {0}")]
    Csv(String),

    /// Record has the wrong number of fields
    #[error("Line {line}: expected {expected} fields, got {actual}")]
    RecordWidth {
        line: u64,
        expected: usize,
        actual: usize,
    },

    /// A reading is not a real number
    #[error("Line {line}, column {column}: invalid reading '{value}'")]
    InvalidReading {
        line: u64,
        column: usize,
        value: String,
    },

    /// The trailing class label is not a non-negative integer
    #[error("Line {line}: invalid class label '{value}'")]
    InvalidLabel { line: u64, value: String },

    /// Readings could not form a sample
    #[error("Invalid sample: {0}")]
    InvalidSample(#[from] ClassifyError),

    /// Source contained no records
    #[error("No data returned")]
    NoData,
}

impl From<std::io::Error> for DataError {
    fn from(err: std::io::Error) -> Self {
        DataError::Io(err.to_string())
    }
}

impl From<csv::Error> for DataError {
    fn from(err: csv::Error) -> Self {
        DataError::Csv(err.to_string())
    }
}

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;
