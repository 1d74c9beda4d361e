//! Dataset cleaning library for the SoilSense crop recommendation pipeline.
//!
//! # Overview
//!
//! This crate turns a raw agronomic dataset into the cleaned feature matrix
//! the training pipeline consumes:
//!
//! - **Loading**: headered CSV into a Polars DataFrame
//! - **Imputation**: missing measurement values replaced with column means
//! - **Outlier capping**: per-column clamping to IQR fences, row-preserving
//! - **Schema**: the canonical seven-column measurement order shared by
//!   every downstream stage
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use soilsense_processing::{load_dataset, DataCleaner};
//!
//! let df = load_dataset("crop_recommendation.csv")?;
//! let report = DataCleaner::clean(df)?;
//!
//! for step in &report.steps {
//!     println!("{step}");
//! }
//! // report.frame feeds soilsense-learning's Trainer
//! ```
//!
//! Cleaning is a one-shot batch computation: it consumes the input frame,
//! returns a new one, and keeps no state between runs.

pub mod cleaner;
pub mod error;
pub mod imputer;
pub mod loader;
pub mod outliers;
pub mod schema;
mod stats;

// Re-exports for convenient access
pub use cleaner::{CleaningReport, CleaningSummary, DataCleaner};
pub use error::{PreprocessingError, Result as PreprocessingResult};
pub use imputer::MeanImputer;
pub use loader::load_dataset;
pub use outliers::OutlierCapper;
pub use schema::{FEATURE_COLUMNS, FEATURE_COUNT, LABEL_COLUMN, ensure_schema};
