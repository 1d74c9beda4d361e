//! The classifier capability and its random forest implementation.
//!
//! The trainer and the prediction service depend only on the [`Classifier`]
//! trait, so the supervised algorithm behind a trained bundle is pluggable.
//! [`RandomForest`] is the stock implementation, wrapping smartcore's
//! ensemble classifier with seeded, reproducible parameters.

use crate::error::{LearningError, Result};
use serde::{Deserialize, Serialize};
use smartcore::ensemble::random_forest_classifier::{
    RandomForestClassifier, RandomForestClassifierParameters,
};
use smartcore::linalg::basic::matrix::DenseMatrix;
use tracing::debug;

/// A supervised classification capability over encoded labels.
///
/// Implementations fit on a row-major feature matrix with one `u32` class id
/// per row and predict class ids for new rows. Fitted state is internal to
/// the implementation; callers treat it as opaque.
pub trait Classifier {
    /// Fit the classifier on scaled features and encoded labels.
    ///
    /// # Errors
    ///
    /// Returns [`LearningError::TrainingFailed`] when the backend cannot fit
    /// the data, or a shape/input error when the matrix is malformed.
    fn fit(&mut self, features: &[Vec<f64>], labels: &[u32]) -> Result<()>;

    /// Predict one encoded label per feature row.
    ///
    /// # Errors
    ///
    /// Returns [`LearningError::Inference`] when called before `fit` or when
    /// the backend rejects the input.
    fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<u32>>;

    /// Short algorithm name for reports and logs.
    fn name(&self) -> &'static str;
}

/// Random forest classifier backed by smartcore.
///
/// Parameters are fixed at construction and the forest is grown from a
/// caller-supplied seed, so fitting the same data with the same
/// configuration reproduces the same model.
#[derive(Debug, Serialize, Deserialize)]
pub struct RandomForest {
    n_trees: u16,
    max_depth: Option<u16>,
    seed: u64,
    model: Option<RandomForestClassifier<f64, u32, DenseMatrix<f64>, Vec<u32>>>,
}

impl RandomForest {
    /// Create an unfitted forest with the given shape parameters.
    #[must_use]
    pub fn new(n_trees: u16, max_depth: Option<u16>, seed: u64) -> Self {
        Self {
            n_trees,
            max_depth,
            seed,
            model: None,
        }
    }

    /// Number of trees the forest grows when fitted.
    #[must_use]
    pub fn n_trees(&self) -> u16 {
        self.n_trees
    }

    /// Flatten a row-major matrix into the dense layout smartcore consumes.
    fn to_dense(features: &[Vec<f64>]) -> Result<DenseMatrix<f64>> {
        let n_samples = features.len();
        if n_samples == 0 {
            return Err(LearningError::InvalidInput(
                "empty feature matrix".to_string(),
            ));
        }

        let n_features = features[0].len();
        let mut flat = Vec::with_capacity(n_samples * n_features);
        for row in features {
            if row.len() != n_features {
                return Err(LearningError::ShapeMismatch {
                    expected: n_features,
                    actual: row.len(),
                });
            }
            flat.extend_from_slice(row);
        }

        Ok(DenseMatrix::new(n_samples, n_features, flat, false))
    }
}

impl Default for RandomForest {
    /// 100 trees, unbounded depth, seed 42.
    fn default() -> Self {
        Self::new(100, None, 42)
    }
}

impl Classifier for RandomForest {
    fn fit(&mut self, features: &[Vec<f64>], labels: &[u32]) -> Result<()> {
        if features.len() != labels.len() {
            return Err(LearningError::InvalidInput(format!(
                "{} feature rows but {} labels",
                features.len(),
                labels.len()
            )));
        }

        let x = Self::to_dense(features)?;
        let y = labels.to_vec();

        let mut params = RandomForestClassifierParameters::default()
            .with_n_trees(self.n_trees)
            .with_seed(self.seed);
        if let Some(depth) = self.max_depth {
            params = params.with_max_depth(depth);
        }

        let model = RandomForestClassifier::fit(&x, &y, params)
            .map_err(|e| LearningError::TrainingFailed(format!("random forest fit: {e}")))?;

        debug!(
            "Fitted random forest: {} trees on {} samples",
            self.n_trees,
            features.len()
        );
        self.model = Some(model);
        Ok(())
    }

    fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<u32>> {
        let model = self
            .model
            .as_ref()
            .ok_or_else(|| LearningError::Inference("classifier has not been fitted".to_string()))?;

        let x = Self::to_dense(features)?;
        model
            .predict(&x)
            .map_err(|e| LearningError::Inference(format!("random forest predict: {e}")))
    }

    fn name(&self) -> &'static str {
        "random_forest"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two well-separated clusters, class 0 low and class 1 high.
    fn clustered_data() -> (Vec<Vec<f64>>, Vec<u32>) {
        let features = vec![
            vec![0.0, 0.1],
            vec![0.2, 0.0],
            vec![0.1, 0.2],
            vec![0.0, 0.0],
            vec![10.0, 10.1],
            vec![10.2, 10.0],
            vec![10.1, 10.2],
            vec![10.0, 10.0],
        ];
        let labels = vec![0, 0, 0, 0, 1, 1, 1, 1];
        (features, labels)
    }

    #[test]
    fn test_fit_and_predict_separable_clusters() {
        let (features, labels) = clustered_data();
        let mut forest = RandomForest::new(20, Some(4), 42);
        forest.fit(&features, &labels).unwrap();

        let predictions = forest
            .predict(&[vec![0.05, 0.05], vec![10.05, 10.05]])
            .unwrap();
        assert_eq!(predictions, vec![0, 1]);
    }

    #[test]
    fn test_predict_before_fit_fails() {
        let forest = RandomForest::default();
        let result = forest.predict(&[vec![1.0, 2.0]]);
        assert!(matches!(result, Err(LearningError::Inference(_))));
    }

    #[test]
    fn test_fit_row_label_count_mismatch_fails() {
        let mut forest = RandomForest::default();
        let result = forest.fit(&[vec![1.0], vec![2.0]], &[0]);
        assert!(matches!(result, Err(LearningError::InvalidInput(_))));
    }

    #[test]
    fn test_fit_ragged_matrix_fails() {
        let mut forest = RandomForest::default();
        let result = forest.fit(&[vec![1.0, 2.0], vec![3.0]], &[0, 1]);
        assert!(matches!(
            result,
            Err(LearningError::ShapeMismatch {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_same_seed_reproduces_predictions() {
        let (features, labels) = clustered_data();
        let probe = vec![vec![0.5, 0.5], vec![9.5, 9.5], vec![5.0, 5.0]];

        let mut first = RandomForest::new(20, None, 7);
        first.fit(&features, &labels).unwrap();
        let mut second = RandomForest::new(20, None, 7);
        second.fit(&features, &labels).unwrap();

        assert_eq!(
            first.predict(&probe).unwrap(),
            second.predict(&probe).unwrap()
        );
    }

    #[test]
    fn test_name() {
        assert_eq!(RandomForest::default().name(), "random_forest");
    }
}
