//! Outlier capping for the measurement columns.
//!
//! Extreme values are clamped to the IQR fences computed per column. Rows
//! are never removed; capping preserves the row count so every record keeps
//! contributing to the fitted transforms downstream.

use crate::error::{PreprocessingError, Result};
use crate::schema::FEATURE_COLUMNS;
use crate::stats::iqr_bounds;
use polars::prelude::*;
use tracing::debug;

/// Clamps per-column outliers to `[Q1 - 1.5*IQR, Q3 + 1.5*IQR]`.
///
/// Quartiles are computed with linear interpolation over the column values
/// as they stand when capping runs; the cleaner invokes this after
/// imputation so the fences reflect the imputed population.
pub struct OutlierCapper;

impl OutlierCapper {
    /// Cap outliers in every measurement column.
    pub fn cap(df: &mut DataFrame, processing_steps: &mut Vec<String>) -> Result<()> {
        for col_name in FEATURE_COLUMNS {
            Self::cap_column(df, col_name, processing_steps)?;
        }
        Ok(())
    }

    /// Cap outliers in a single column.
    pub fn cap_column(
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

        let mut observed: Vec<f64> = values.into_iter().flatten().collect();
        if observed.is_empty() {
            return Err(PreprocessingError::EmptyColumn(col_name.to_string()));
        }
        observed.sort_by(|a, b| a.total_cmp(b));

        let bounds = iqr_bounds(&observed);

        let outliers = values
            .into_iter()
            .flatten()
            .filter(|v| *v < bounds.lower || *v > bounds.upper)
            .count();

        let capped = values.apply(|v| v.map(|x| x.clamp(bounds.lower, bounds.upper)));
        df.replace(col_name, capped.into_series())?;

        if outliers > 0 {
            processing_steps.push(format!(
                "Capped {} outliers in '{}' to [{:.2}, {:.2}]",
                outliers, col_name, bounds.lower, bounds.upper
            ));
            debug!(
                "Capped {} values in '{}' at IQR fences [{:.4}, {:.4}]",
                outliers, col_name, bounds.lower, bounds.upper
            );
        }

        Ok(())
    }
}
