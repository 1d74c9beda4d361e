//! Mean imputation for the measurement columns.
//!
//! Missing entries (nulls as well as NaN markers that survive CSV parsing)
//! are replaced with the column mean computed over the observed values of the
//! same column.

use crate::error::{PreprocessingError, Result};
use crate::schema::FEATURE_COLUMNS;
use polars::prelude::*;
use tracing::debug;

/// Fills missing values with per-column means.
pub struct MeanImputer;

impl MeanImputer {
    /// Apply mean imputation to every measurement column.
    pub fn impute(df: &mut DataFrame, processing_steps: &mut Vec<String>) -> Result<()> {
        for col_name in FEATURE_COLUMNS {
            Self::impute_column(df, col_name, processing_steps)?;
        }
        Ok(())
    }

    /// Apply mean imputation to a single column.
    ///
    /// The column is rebuilt as `Float64` even when nothing is missing, so
    /// integer-typed CSV columns leave this stage in the numeric type the
    /// rest of the pipeline expects.
    pub fn impute_column(
        df: &mut DataFrame,
        col_name: &str,
        processing_steps: &mut Vec<String>,
    ) -> Result<()> {
        let float_series = {
            let column = df
                .column(col_name)
                .map_err(|_| PreprocessingError::ColumnNotFound(col_name.to_string()))?;
            column.as_materialized_series().cast(&DataType::Float64)?
        };
        let values = float_series.f64()?;

        let mut sum = 0.0;
        let mut observed = 0usize;
        for value in values.into_iter().flatten() {
            if value.is_finite() {
                sum += value;
                observed += 1;
            }
        }

        if observed == 0 {
            return Err(PreprocessingError::EmptyColumn(col_name.to_string()));
        }

        let mean_val = sum / observed as f64;
        let missing = values.len() - observed;

        let filled: Vec<f64> = values
            .into_iter()
            .map(|v| match v {
                Some(x) if x.is_finite() => x,
                _ => mean_val,
            })
            .collect();
        df.replace(col_name, Series::new(col_name.into(), filled))?;

        if missing > 0 {
            processing_steps.push(format!(
                "Filled {} missing values in '{}' with mean: {:.2}",
                missing, col_name, mean_val
            ));
            debug!("Imputed {} entries in '{}' with {:.4}", missing, col_name, mean_val);
        }

        Ok(())
    }
}
