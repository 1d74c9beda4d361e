//! DataFrame conversion at the cleaning/learning boundary.
//!
//! The cleaning crate hands over a Polars frame; the learning side works on
//! row-major `f64` matrices and plain label vectors. Conversion reads the
//! measurement columns in the canonical order fixed by the schema, which is
//! what keeps a trained bundle and any future input vector aligned.

use crate::error::{LearningError, Result};
use polars::prelude::*;
use soilsense_processing::{FEATURE_COLUMNS, LABEL_COLUMN};

/// Extract the feature matrix from a cleaned frame, row-major, columns in
/// canonical order.
///
/// # Errors
///
/// Returns [`LearningError::MissingColumn`] when a measurement column is
/// absent and [`LearningError::InvalidInput`] when a missing or non-finite
/// value is encountered; cleaned data never contains either, so hitting this
/// means the frame skipped cleaning.
pub fn feature_matrix(df: &DataFrame) -> Result<Vec<Vec<f64>>> {
    let height = df.height();
    let mut columns: Vec<Vec<f64>> = Vec::with_capacity(FEATURE_COLUMNS.len());

    for col_name in FEATURE_COLUMNS {
        let float_series = df
            .column(col_name)
            .map_err(|_| LearningError::MissingColumn(col_name.to_string()))?
            .as_materialized_series()
            .cast(&DataType::Float64)?;
        let values = float_series.f64()?;

        let mut column = Vec::with_capacity(height);
        for value in values.into_iter() {
            match value {
                Some(v) if v.is_finite() => column.push(v),
                _ => {
                    return Err(LearningError::InvalidInput(format!(
                        "column '{}' contains a missing or non-finite value; clean the dataset first",
                        col_name
                    )));
                }
            }
        }
        columns.push(column);
    }

    let mut rows: Vec<Vec<f64>> = (0..height)
        .map(|_| Vec::with_capacity(FEATURE_COLUMNS.len()))
        .collect();
    for column in &columns {
        for (row, value) in rows.iter_mut().zip(column) {
            row.push(*value);
        }
    }

    Ok(rows)
}

/// Extract the crop name column from a training frame.
///
/// # Errors
///
/// Returns [`LearningError::MissingColumn`] when the label column is absent
/// and [`LearningError::InvalidInput`] when a label entry is null.
pub fn label_values(df: &DataFrame) -> Result<Vec<String>> {
    let column = df
        .column(LABEL_COLUMN)
        .map_err(|_| LearningError::MissingColumn(LABEL_COLUMN.to_string()))?;
    let series = column.as_materialized_series();
    let labels = series.str()?;

    let mut values = Vec::with_capacity(labels.len());
    for label in labels.into_iter() {
        match label {
            Some(l) => values.push(l.to_string()),
            None => {
                return Err(LearningError::InvalidInput(
                    "label column contains a missing value".to_string(),
                ));
            }
        }
    }

    Ok(values)
}
