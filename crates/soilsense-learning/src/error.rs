//! Error types for the soilsense-learning crate.
//!
//! This module defines [`LearningError`], the main error type used throughout
//! the crate. All public API functions return `Result<T, LearningError>`.
//!
//! Every variant is a deterministic logic error, terminal for the training
//! run or inference call that raised it. Nothing here is retried and nothing
//! is substituted with a default: a silently defaulted feature value or
//! label would corrupt a recommendation without any observable signal.

use thiserror::Error;

/// The main error type for training and inference operations.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new variants
/// in future versions without breaking downstream code.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LearningError {
    /// Invalid data provided for fitting or inference.
    ///
    /// Common causes:
    /// - A non-finite (NaN or infinite) measurement at inference time
    /// - An empty matrix or label set at fit time
    /// - Unclean training data reaching the learning boundary
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A feature vector's width does not match the width the transforms
    /// were fitted on.
    #[error("Feature vector has {actual} columns, expected {expected}")]
    ShapeMismatch {
        /// Width established at fit time.
        expected: usize,
        /// Width of the offending input.
        actual: usize,
    },

    /// A crop name was requested that the codec never saw during fitting.
    #[error("Label '{0}' was not present in the training data")]
    UnknownLabel(String),

    /// A class id outside the fitted range was handed to the codec.
    #[error("Class id {id} is outside the fitted range [0, {classes})")]
    UnknownId {
        /// The offending id.
        id: u32,
        /// Number of fitted classes.
        classes: u32,
    },

    /// A feature column has zero variance, so standardization is undefined.
    #[error("Feature column {0} has zero variance; cannot standardize")]
    DegenerateColumn(usize),

    /// A train/test partition would be empty at the requested split.
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Invalid configuration provided to the trainer.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The classifier backend failed to fit.
    #[error("Training failed: {0}")]
    TrainingFailed(String),

    /// An error occurred during inference/prediction.
    #[error("Inference error: {0}")]
    Inference(String),

    /// The persisted model bundle was not found on disk.
    #[error("Model bundle not found: {path}")]
    ModelNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A required column is absent from the training frame.
    #[error("Column '{0}' not found in training frame")]
    MissingColumn(String),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error during bundle save/load operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for training and inference operations.
pub type Result<T> = std::result::Result<T, LearningError>;
