//! soilsense-learning: crop classifier training and inference.
//!
//! This crate turns the cleaned feature matrix produced by
//! `soilsense-processing` into a reusable crop recommendation model, and
//! serves single-vector predictions from it.
//!
//! # Features
//!
//! - **Label encoding**: deterministic crop name to class id mapping
//! - **Standardization**: per-column scaling fitted once, reused forever
//! - **Pluggable classification**: any [`Classifier`] implementation trains
//!   and serves; a seeded random forest ships as the default
//! - **Holdout evaluation**: deterministic seeded split, leakage-free
//!   accuracy reporting
//! - **Immutable bundles**: scaler, classifier, and codec sealed together,
//!   serializable, safe for concurrent readers
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use soilsense_learning::{SoilMeasurements, Trainer, TrainerConfig};
//! use soilsense_processing::{DataCleaner, load_dataset};
//!
//! let report = DataCleaner::clean(load_dataset("crops.csv")?)?;
//!
//! let trainer = Trainer::new(TrainerConfig::default());
//! let outcome = trainer.train_frame(&report.frame)?;
//! println!("accuracy: {:.4}", outcome.report.accuracy);
//!
//! let crop = outcome.service.predict(&SoilMeasurements {
//!     nitrogen: 20.0,
//!     phosphorus: 20.0,
//!     potassium: 50.0,
//!     temperature: 25.0,
//!     humidity: 60.0,
//!     ph: 6.5,
//!     rainfall: 80.0,
//! })?;
//! println!("recommended crop: {crop}");
//! ```
//!
//! # Architecture
//!
//! ```text
//! cleaned DataFrame
//!        │
//!        ▼
//! ┌─────────────────────────────────────────────────────┐
//! │ Trainer                                             │
//! │   seeded split ──► StandardScaler::fit (train only) │
//! │                ──► Classifier::fit                  │
//! │                ──► holdout accuracy                 │
//! └──────────────────────────┬──────────────────────────┘
//!                            ▼
//!          PredictionService { scaler, classifier, codec }
//!                            │
//!                            ▼
//!                  predict(measurements) -> crop name
//! ```
//!
//! The service applies the exact transformations fitted at training time to
//! every input. Fitted state never lives in globals; it travels inside the
//! bundle, so a stale scaler can never be paired with a fresh model.

mod codec;
mod config;
pub mod conversion;
mod error;
mod model;
mod scaler;
mod service;
mod trainer;

// Re-export public API
//
// Codec and scaler types
pub use codec::LabelCodec;
pub use scaler::StandardScaler;
// Configuration types
pub use config::{TrainerConfig, TrainerConfigBuilder};
// Error types
pub use error::{LearningError, Result};
// Classifier capability
pub use model::{Classifier, RandomForest};
// Service types
pub use service::{BUNDLE_FORMAT_VERSION, PredictionService, SoilMeasurements};
// Trainer types
pub use trainer::{Trainer, TrainingOutcome, TrainingReport, accuracy_score};
