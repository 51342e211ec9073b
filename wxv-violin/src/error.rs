/// Error types for binning and frame construction
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BinError {
    /// No records, so there is no temperature domain to bin over
    #[error("No weather records to plot")]
    EmptyInput,
}

/// Type alias for Results using BinError
pub type Result<T> = std::result::Result<T, BinError>;
