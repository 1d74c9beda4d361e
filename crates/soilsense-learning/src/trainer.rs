//! The training pipeline.
//!
//! This module provides the [`Trainer`], which turns a cleaned feature
//! matrix and encoded labels into a ready-to-serve [`PredictionService`].
//!
//! # Overview
//!
//! A training run executes these stages in order:
//!
//! 1. **Partition** - deterministic seeded shuffle, `test_size` held out
//! 2. **Scale** - standardization fitted on the train partition only
//! 3. **Fit** - the classifier capability trains on scaled train features
//! 4. **Evaluate** - accuracy measured on the held-out partition
//! 5. **Bundle** - scaler, classifier, and codec sealed into one service
//!
//! The held-out partition never influences the fitted statistics; scaling
//! it with the train-fitted scaler is what makes the reported accuracy an
//! honest estimate.
//!
//! # Example
//!
//! ```rust,ignore
//! use soilsense_learning::{Trainer, TrainerConfig};
//!
//! let trainer = Trainer::new(TrainerConfig::default());
//! let outcome = trainer.train_frame(&cleaned_frame)?;
//!
//! println!("accuracy: {:.4}", outcome.report.accuracy);
//! let crop = outcome.service.predict(&measurements)?;
//! ```

use crate::codec::LabelCodec;
use crate::config::TrainerConfig;
use crate::conversion;
use crate::error::{LearningError, Result};
use crate::model::{Classifier, RandomForest};
use crate::scaler::StandardScaler;
use crate::service::PredictionService;
use polars::prelude::DataFrame;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::Serialize;
use tracing::{debug, info};

/// Holdout evaluation figures from one training run.
///
/// Reporting data only; nothing downstream consumes it.
#[derive(Debug, Clone, Serialize)]
pub struct TrainingReport {
    /// Fraction of held-out rows predicted correctly, in `[0, 1]`.
    pub accuracy: f64,
    /// Rows the model was fitted on.
    pub train_rows: usize,
    /// Rows held out for evaluation.
    pub test_rows: usize,
    /// Algorithm name of the fitted classifier.
    pub model_name: &'static str,
}

/// A fitted service together with its evaluation report.
#[derive(Debug)]
pub struct TrainingOutcome<C> {
    /// The immutable inference bundle produced by this run.
    pub service: PredictionService<C>,
    /// Holdout evaluation figures.
    pub report: TrainingReport,
}

/// Fits classifiers on cleaned crop data.
#[derive(Debug, Clone, Default)]
pub struct Trainer {
    config: TrainerConfig,
}

impl Trainer {
    /// Create a trainer with the given configuration.
    #[must_use]
    pub fn new(config: TrainerConfig) -> Self {
        Self { config }
    }

    /// Train on a cleaned frame with the default random forest.
    ///
    /// Extracts the feature matrix and labels, fits the label codec, and
    /// delegates to [`train`](Self::train). This is the composition the CLI
    /// uses.
    pub fn train_frame(&self, df: &DataFrame) -> Result<TrainingOutcome<RandomForest>> {
        let features = conversion::feature_matrix(df)?;
        let labels = conversion::label_values(df)?;

        let codec = LabelCodec::fit(&labels)?;
        let encoded: Vec<u32> = labels
            .iter()
            .map(|label| codec.encode(label))
            .collect::<Result<_>>()?;

        let classifier =
            RandomForest::new(self.config.n_trees, self.config.max_depth, self.config.seed);
        self.train(&features, &encoded, codec, classifier)
    }

    /// Train a classifier capability and bundle it for inference.
    ///
    /// `features` must already be cleaned; `labels` are the codec-encoded
    /// class ids, one per row; `codec` is the codec that produced them. The
    /// returned bundle owns all fitted state from this run and nothing from
    /// any other.
    ///
    /// # Errors
    ///
    /// - [`LearningError::InvalidInput`] when row and label counts differ
    /// - [`LearningError::InsufficientData`] when either partition would be
    ///   empty at the configured `test_size`
    /// - fit-time errors from the scaler or classifier, propagated as-is
    pub fn train<C: Classifier>(
        &self,
        features: &[Vec<f64>],
        labels: &[u32],
        codec: LabelCodec,
        mut classifier: C,
    ) -> Result<TrainingOutcome<C>> {
        if features.len() != labels.len() {
            return Err(LearningError::InvalidInput(format!(
                "{} feature rows but {} labels",
                features.len(),
                labels.len()
            )));
        }

        let (train_idx, test_idx) = self.split_indices(features.len())?;
        debug!(
            "Partitioned {} rows into {} train / {} test (seed {})",
            features.len(),
            train_idx.len(),
            test_idx.len(),
            self.config.seed
        );

        let train_x: Vec<Vec<f64>> = train_idx.iter().map(|&i| features[i].clone()).collect();
        let train_y: Vec<u32> = train_idx.iter().map(|&i| labels[i]).collect();
        let test_x: Vec<Vec<f64>> = test_idx.iter().map(|&i| features[i].clone()).collect();
        let test_y: Vec<u32> = test_idx.iter().map(|&i| labels[i]).collect();

        // Fitted on the train partition only; the held-out rows must not
        // leak into the statistics the service will reuse at inference time.
        let scaler = StandardScaler::fit(&train_x)?;
        let train_scaled = scaler.transform(&train_x)?;
        let test_scaled = scaler.transform(&test_x)?;

        classifier.fit(&train_scaled, &train_y)?;

        let predicted = classifier.predict(&test_scaled)?;
        let accuracy = accuracy_score(&predicted, &test_y);

        info!(
            "Training complete: {} accuracy {:.4} on {} held-out rows",
            classifier.name(),
            accuracy,
            test_y.len()
        );

        let report = TrainingReport {
            accuracy,
            train_rows: train_x.len(),
            test_rows: test_x.len(),
            model_name: classifier.name(),
        };

        Ok(TrainingOutcome {
            service: PredictionService::new(scaler, classifier, codec),
            report,
        })
    }

    /// Deterministic train/test partition of `0..n`.
    ///
    /// The same seed over the same `n` always yields the same shuffle; no
    /// global random state is consulted.
    fn split_indices(&self, n: usize) -> Result<(Vec<usize>, Vec<usize>)> {
        let mut indices: Vec<usize> = (0..n).collect();
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        indices.shuffle(&mut rng);

        let test_len = (n as f64 * self.config.test_size).round() as usize;
        if test_len == 0 {
            return Err(LearningError::InsufficientData(format!(
                "test partition would be empty: {} rows at test_size {}",
                n, self.config.test_size
            )));
        }
        if test_len >= n {
            return Err(LearningError::InsufficientData(format!(
                "train partition would be empty: {} rows at test_size {}",
                n, self.config.test_size
            )));
        }

        let test = indices[..test_len].to_vec();
        let train = indices[test_len..].to_vec();
        Ok((train, test))
    }
}

/// Fraction of predictions equal to the true encoded label.
#[must_use]
pub fn accuracy_score(predicted: &[u32], actual: &[u32]) -> f64 {
    if actual.is_empty() {
        return 0.0;
    }
    let correct = predicted
        .iter()
        .zip(actual)
        .filter(|(p, a)| p == a)
        .count();
    correct as f64 / actual.len() as f64
}
