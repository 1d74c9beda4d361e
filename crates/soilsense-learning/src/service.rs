//! The prediction service: one immutable bundle from scaler to crop name.
//!
//! This module provides [`PredictionService`], which seals the three fitted
//! artifacts of a training run and enables:
//!
//! - **Single-vector inference** via [`predict()`](PredictionService::predict)
//!   and [`predict_features()`](PredictionService::predict_features)
//! - **Serialization** via [`save()`](PredictionService::save),
//!   [`load()`](PredictionService::load),
//!   [`to_bytes()`](PredictionService::to_bytes), and
//!   [`from_bytes()`](PredictionService::from_bytes)
//! - **Introspection** via [`classes()`](PredictionService::classes) and
//!   [`model_name()`](PredictionService::model_name)
//!
//! # Lifecycle
//!
//! A service is created once, by the [`Trainer`](crate::Trainer) after a
//! training run completes, and is read-only thereafter. The scaler,
//! classifier, and codec inside it always originate from the same run; a new
//! training run produces a wholly new bundle rather than mutating an
//! existing one, so in-flight inference never observes a torn state.
//!
//! # Thread Safety
//!
//! The bundle performs no interior mutation, so a single instance can serve
//! concurrent read-only callers without locking. This is pinned at compile
//! time below.
//!
//! # Example
//!
//! ```rust,ignore
//! use soilsense_learning::{PredictionService, RandomForest, SoilMeasurements};
//!
//! let service = outcome.service;
//! let crop = service.predict(&SoilMeasurements {
//!     nitrogen: 20.0,
//!     phosphorus: 20.0,
//!     potassium: 50.0,
//!     temperature: 25.0,
//!     humidity: 60.0,
//!     ph: 6.5,
//!     rainfall: 80.0,
//! })?;
//!
//! service.save("model.json")?;
//! let restored = PredictionService::<RandomForest>::load("model.json")?;
//! ```

use crate::codec::LabelCodec;
use crate::error::{LearningError, Result};
use crate::model::Classifier;
use crate::scaler::StandardScaler;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One soil/climate measurement vector, the named-parameter surface the
/// hosted inference client invokes.
///
/// Field order here is the canonical column order used throughout the
/// pipeline. [`to_vector`](Self::to_vector) is the single place a
/// measurement struct becomes a positional vector; nothing else may
/// assemble one, or the ordering invariant would fracture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilMeasurements {
    /// Nitrogen content.
    #[serde(rename = "N")]
    pub nitrogen: f64,
    /// Phosphorus content.
    #[serde(rename = "P")]
    pub phosphorus: f64,
    /// Potassium content.
    #[serde(rename = "K")]
    pub potassium: f64,
    /// Temperature in degrees Celsius.
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
    /// Soil pH.
    pub ph: f64,
    /// Rainfall in millimeters.
    pub rainfall: f64,
}

impl SoilMeasurements {
    /// The measurements as a positional vector in canonical column order.
    #[must_use]
    pub fn to_vector(&self) -> [f64; 7] {
        [
            self.nitrogen,
            self.phosphorus,
            self.potassium,
            self.temperature,
            self.humidity,
            self.ph,
            self.rainfall,
        ]
    }
}

/// A trained crop recommendation model ready for inference.
///
/// Bundles the fitted [`StandardScaler`], the fitted classifier capability,
/// and the fitted [`LabelCodec`] of one training run as a single immutable
/// value. Inference applies exactly the transformations fitted at training
/// time; nothing is ever refitted here.
///
/// # Serialization
///
/// The bundle serializes as the triple {scaler statistics, classifier
/// parameters, label mapping}, so a service persisted with
/// [`save`](Self::save) and restored with [`load`](Self::load) predicts
/// identically to the original.
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictionService<C> {
    format_version: u32,
    scaler: StandardScaler,
    classifier: C,
    codec: LabelCodec,
}

/// Version stamp written into every persisted bundle.
pub const BUNDLE_FORMAT_VERSION: u32 = 1;

impl<C: Classifier> PredictionService<C> {
    /// Seal the fitted artifacts of one training run.
    ///
    /// Internal constructor used by [`Trainer::train`](crate::Trainer::train);
    /// the crate never assembles a bundle from artifacts of different runs.
    pub(crate) fn new(scaler: StandardScaler, classifier: C, codec: LabelCodec) -> Self {
        Self {
            format_version: BUNDLE_FORMAT_VERSION,
            scaler,
            classifier,
            codec,
        }
    }

    /// Format version this bundle was written with.
    #[must_use]
    pub fn format_version(&self) -> u32 {
        self.format_version
    }

    /// Recommend a crop for one measurement vector.
    ///
    /// Pure with respect to the bundle: identical inputs against an
    /// unchanged service return identical output.
    ///
    /// # Errors
    ///
    /// Returns [`LearningError::InvalidInput`] for NaN or infinite
    /// measurements, before anything reaches the classifier.
    pub fn predict(&self, measurements: &SoilMeasurements) -> Result<String> {
        self.predict_features(&measurements.to_vector())
    }

    /// Recommend a crop for a raw feature slice in canonical column order.
    ///
    /// This is the positional variant of [`predict`](Self::predict) used
    /// when the caller already holds a vector.
    ///
    /// # Errors
    ///
    /// - [`LearningError::InvalidInput`] for NaN or infinite entries
    /// - [`LearningError::ShapeMismatch`] when the slice length differs
    ///   from the fitted feature count
    pub fn predict_features(&self, features: &[f64]) -> Result<String> {
        for (index, value) in features.iter().enumerate() {
            if !value.is_finite() {
                return Err(LearningError::InvalidInput(format!(
                    "measurement {} is not a finite number: {}",
                    index, value
                )));
            }
        }

        let scaled = self.scaler.transform_row(features)?;
        let predicted = self.classifier.predict(&[scaled])?;
        let id = predicted
            .first()
            .copied()
            .ok_or_else(|| LearningError::Inference("classifier returned no prediction".to_string()))?;

        Ok(self.codec.decode(id)?.to_string())
    }

    /// The crop names this service can recommend, in class id order.
    #[must_use]
    pub fn classes(&self) -> &[String] {
        self.codec.classes()
    }

    /// Algorithm name of the bundled classifier.
    #[must_use]
    pub fn model_name(&self) -> &'static str {
        self.classifier.name()
    }

    /// Width of the measurement vectors this service accepts.
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.scaler.n_features()
    }
}

impl<C: Classifier + Serialize> PredictionService<C> {
    /// Serialize the bundle to JSON bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Persist the bundle to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(self)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

impl<C: Classifier + DeserializeOwned> PredictionService<C> {
    /// Restore a bundle from JSON bytes produced by
    /// [`to_bytes`](Self::to_bytes).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Load a bundle previously written with [`save`](Self::save).
    ///
    /// # Errors
    ///
    /// Returns [`LearningError::ModelNotFound`] when the path does not
    /// exist, [`LearningError::Json`] when the file is not a valid bundle.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LearningError::ModelNotFound {
                path: path.display().to_string(),
            });
        }

        let bytes = std::fs::read(path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

// One bundle, many concurrent readers.
static_assertions::assert_impl_all!(
    PredictionService<crate::model::RandomForest>: Send, Sync
);
