/// Error types for loading and filtering weather data
use thiserror::Error;

/// Fatal errors raised while loading the weather CSV.
///
/// The first bad row aborts the load; no partial dataset is produced.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The CSV reader itself failed (bad quoting, I/O, ...)
    #[error("Failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is not present in the header row
    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    /// The `date` field is not a valid YYYYMMDD calendar date
    #[error("Row {row}: invalid date {value:?}")]
    InvalidDate { row: usize, value: String },

    /// A temperature field is not numeric
    #[error("Row {row}: column {column} is not a number: {value:?}")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },
}

impl LoadError {
    /// 1-based data row that failed, when the failure is tied to one.
    pub fn row(&self) -> Option<usize> {
        match self {
            LoadError::InvalidDate { row, .. } | LoadError::InvalidNumber { row, .. } => Some(*row),
            LoadError::Csv(_) | LoadError::MissingColumn(_) => None,
        }
    }
}

/// A dropdown value that does not name a season filter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown season filter: {0:?}")]
pub struct FilterParseError(pub String);

/// Type alias for Results using LoadError
pub type Result<T> = std::result::Result<T, LoadError>;
