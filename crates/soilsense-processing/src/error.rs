//! Custom error types for the dataset cleaning pipeline.
//!
//! All public operations in this crate return [`Result`], an alias over
//! [`PreprocessingError`]. Every variant is terminal for the operation that
//! raised it; nothing in the cleaning path substitutes a default value when a
//! computation fails.

use thiserror::Error;

/// The main error type for dataset cleaning operations.
#[derive(Error, Debug)]
pub enum PreprocessingError {
    /// A required column is absent from the dataset.
    #[error("Column '{0}' not found in dataset")]
    ColumnNotFound(String),

    /// A column has no observed values, so its mean is undefined and
    /// imputation cannot proceed.
    #[error("No observed values in column '{0}'; cannot impute")]
    EmptyColumn(String),

    /// The dataset has no rows.
    #[error("Dataset contains no rows")]
    EmptyDataset,

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for cleaning operations.
pub type Result<T> = std::result::Result<T, PreprocessingError>;
