//! Configuration types for the training pipeline.
//!
//! This module provides [`TrainerConfig`] and its builder.
//!
//! # Example
//!
//! ```
//! use soilsense_learning::TrainerConfig;
//!
//! let config = TrainerConfig::builder()
//!     .test_size(0.2)
//!     .seed(42)
//!     .n_trees(100)
//!     .build()
//!     .expect("valid config");
//! ```

use crate::error::LearningError;

/// Configuration for a training run.
///
/// Use [`TrainerConfig::builder()`] to construct a configuration with the
/// builder pattern. All fields have sensible defaults.
///
/// # Validation
///
/// The builder validates the following constraints on
/// [`build()`](TrainerConfigBuilder::build):
/// - `test_size` must be in range `(0.0, 1.0)` (exclusive)
/// - `n_trees` must be at least 1
#[derive(Debug, Clone)]
pub struct TrainerConfig {
    /// Fraction of rows held out for evaluation (default: 0.2).
    pub test_size: f64,

    /// Seed for the train/test partition and the forest (default: 42).
    ///
    /// The same seed over the same data in the same order reproduces the
    /// partition, the fitted model, and the reported accuracy exactly.
    pub seed: u64,

    /// Number of trees grown by the default random forest (default: 100).
    pub n_trees: u16,

    /// Maximum tree depth; `None` leaves depth unbounded (default: `None`).
    pub max_depth: Option<u16>,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            test_size: 0.2,
            seed: 42,
            n_trees: 100,
            max_depth: None,
        }
    }
}

impl TrainerConfig {
    /// Create a new builder for `TrainerConfig`.
    #[must_use]
    pub fn builder() -> TrainerConfigBuilder {
        TrainerConfigBuilder::default()
    }
}

/// Builder for [`TrainerConfig`].
///
/// Created via [`TrainerConfig::builder()`]. All setters return `self` to
/// allow method chaining.
#[derive(Debug, Clone, Default)]
pub struct TrainerConfigBuilder {
    config: TrainerConfig,
}

impl TrainerConfigBuilder {
    /// Set the held-out fraction (default: 0.2).
    #[must_use]
    pub fn test_size(mut self, size: f64) -> Self {
        self.config.test_size = size;
        self
    }

    /// Set the partition/forest seed (default: 42).
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Set the number of forest trees (default: 100).
    #[must_use]
    pub fn n_trees(mut self, n_trees: u16) -> Self {
        self.config.n_trees = n_trees;
        self
    }

    /// Set the maximum tree depth (default: unbounded).
    #[must_use]
    pub fn max_depth(mut self, depth: u16) -> Self {
        self.config.max_depth = Some(depth);
        self
    }

    /// Build the configuration, validating all settings.
    ///
    /// # Errors
    ///
    /// Returns [`LearningError::InvalidConfig`] if:
    /// - `test_size` is not in range `(0.0, 1.0)`
    /// - `n_trees` is 0
    pub fn build(self) -> Result<TrainerConfig, LearningError> {
        if self.config.test_size <= 0.0 || self.config.test_size >= 1.0 {
            return Err(LearningError::InvalidConfig(
                "test_size must be between 0.0 and 1.0 (exclusive)".to_string(),
            ));
        }

        if self.config.n_trees == 0 {
            return Err(LearningError::InvalidConfig(
                "n_trees must be at least 1".to_string(),
            ));
        }

        Ok(self.config)
    }
}
