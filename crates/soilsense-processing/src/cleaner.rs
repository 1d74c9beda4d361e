//! The dataset cleaner.
//!
//! Runs the two cleaning stages in fixed order: mean imputation first, then
//! IQR outlier capping. The order matters because the capping fences are
//! defined over the imputed population.

use crate::error::Result;
use crate::imputer::MeanImputer;
use crate::outliers::OutlierCapper;
use crate::schema::ensure_schema;
use polars::prelude::*;
use serde::Serialize;
use tracing::info;

/// A cleaned dataset together with the log of what was done to it.
#[derive(Debug, Clone)]
pub struct CleaningReport {
    /// The cleaned frame: all measurement columns are `Float64`, carry no
    /// missing values, and sit within their per-column IQR fences. The
    /// label column and the row count are untouched.
    pub frame: DataFrame,
    /// Human-readable record of each imputation and capping action.
    pub steps: Vec<String>,
}

/// Summary of a cleaning run, suitable for operator-facing reports.
#[derive(Debug, Clone, Serialize)]
pub struct CleaningSummary {
    pub rows: usize,
    pub steps: Vec<String>,
}

impl CleaningReport {
    /// Condense the report for logging or serialization.
    pub fn summary(&self) -> CleaningSummary {
        CleaningSummary {
            rows: self.frame.height(),
            steps: self.steps.clone(),
        }
    }
}

/// Cleans raw crop recommendation datasets.
pub struct DataCleaner;

impl DataCleaner {
    /// Clean a raw dataset: impute missing measurement values, then cap
    /// outliers. Consumes the frame and returns the cleaned version; the
    /// input population is the only data the fitted statistics see.
    pub fn clean(mut df: DataFrame) -> Result<CleaningReport> {
        ensure_schema(&df)?;

        let mut steps = Vec::new();

        MeanImputer::impute(&mut df, &mut steps)?;
        OutlierCapper::cap(&mut df, &mut steps)?;

        info!(
            "Cleaning complete: {} rows, {} adjustments",
            df.height(),
            steps.len()
        );

        Ok(CleaningReport { frame: df, steps })
    }
}
