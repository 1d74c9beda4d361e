//! Feature standardization.
//!
//! [`StandardScaler`] rescales each feature column to zero mean and unit
//! variance using statistics captured at fit time. The fitted statistics are
//! the only ones ever applied: `transform` never recomputes them from its
//! argument, which is what keeps training-time and inference-time inputs on
//! the same scale.

use crate::error::{LearningError, Result};
use serde::{Deserialize, Serialize};

/// Per-column standardization transform.
///
/// `fit` is the only constructor, so an unfitted scaler cannot exist; the
/// transform-before-fit misuse is unrepresentable.
///
/// The standard deviation is the population form (divide by `n`). A column
/// whose deviation is zero cannot be standardized and is rejected at fit
/// time rather than producing infinities later.
///
/// # Example
///
/// ```
/// use soilsense_learning::StandardScaler;
///
/// let matrix = vec![vec![1.0, 10.0], vec![3.0, 30.0], vec![5.0, 50.0]];
/// let scaler = StandardScaler::fit(&matrix).unwrap();
///
/// let scaled = scaler.transform_row(&[3.0, 30.0]).unwrap();
/// assert!(scaled.iter().all(|v| v.abs() < 1e-12));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    means: Vec<f64>,
    stds: Vec<f64>,
}

impl StandardScaler {
    /// Compute per-column mean and population standard deviation over a
    /// row-major training matrix.
    ///
    /// # Errors
    ///
    /// - [`LearningError::InvalidInput`] for an empty matrix, an empty row,
    ///   or a non-finite entry
    /// - [`LearningError::ShapeMismatch`] for ragged rows
    /// - [`LearningError::DegenerateColumn`] for a zero-variance column
    pub fn fit(matrix: &[Vec<f64>]) -> Result<Self> {
        let rows = matrix.len();
        if rows == 0 {
            return Err(LearningError::InvalidInput(
                "cannot fit a scaler on an empty matrix".to_string(),
            ));
        }

        let width = matrix[0].len();
        if width == 0 {
            return Err(LearningError::InvalidInput(
                "cannot fit a scaler on zero-width rows".to_string(),
            ));
        }

        for row in matrix {
            if row.len() != width {
                return Err(LearningError::ShapeMismatch {
                    expected: width,
                    actual: row.len(),
                });
            }
            for value in row {
                if !value.is_finite() {
                    return Err(LearningError::InvalidInput(format!(
                        "non-finite value {} in training matrix",
                        value
                    )));
                }
            }
        }

        let mut means = vec![0.0; width];
        for row in matrix {
            for (j, value) in row.iter().enumerate() {
                means[j] += value;
            }
        }
        for mean in &mut means {
            *mean /= rows as f64;
        }

        let mut stds = vec![0.0; width];
        for row in matrix {
            for (j, value) in row.iter().enumerate() {
                stds[j] += (value - means[j]).powi(2);
            }
        }
        for (j, std) in stds.iter_mut().enumerate() {
            *std = (*std / rows as f64).sqrt();
            if *std == 0.0 {
                return Err(LearningError::DegenerateColumn(j));
            }
        }

        Ok(Self { means, stds })
    }

    /// Width of the matrix this scaler was fitted on.
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.means.len()
    }

    /// Standardize one feature vector with the fitted statistics.
    ///
    /// # Errors
    ///
    /// Returns [`LearningError::ShapeMismatch`] when the row width differs
    /// from the fitted width.
    pub fn transform_row(&self, row: &[f64]) -> Result<Vec<f64>> {
        if row.len() != self.means.len() {
            return Err(LearningError::ShapeMismatch {
                expected: self.means.len(),
                actual: row.len(),
            });
        }

        Ok(row
            .iter()
            .zip(self.means.iter().zip(&self.stds))
            .map(|(value, (mean, std))| (value - mean) / std)
            .collect())
    }

    /// Standardize a row-major matrix with the fitted statistics.
    pub fn transform(&self, matrix: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
        matrix.iter().map(|row| self.transform_row(row)).collect()
    }
}
