//! Dataset schema for crop recommendation data.
//!
//! Every stage of the pipeline, from cleaning through inference, reads the
//! seven measurement columns in the order fixed here. The ordering is a
//! load-bearing invariant: a vector assembled in a different order would
//! scale and classify without any observable error, and silently produce
//! wrong recommendations.

use crate::error::{PreprocessingError, Result};
use polars::prelude::*;

/// The seven soil/climate measurement columns, in canonical order.
pub const FEATURE_COLUMNS: [&str; 7] = [
    "N",
    "P",
    "K",
    "temperature",
    "humidity",
    "ph",
    "rainfall",
];

/// Number of measurement columns.
pub const FEATURE_COUNT: usize = FEATURE_COLUMNS.len();

/// The categorical crop name column.
pub const LABEL_COLUMN: &str = "label";

/// Verify that a dataset carries all required columns and at least one row.
pub fn ensure_schema(df: &DataFrame) -> Result<()> {
    if df.height() == 0 {
        return Err(PreprocessingError::EmptyDataset);
    }

    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    for required in FEATURE_COLUMNS.iter().chain(std::iter::once(&LABEL_COLUMN)) {
        if !names.iter().any(|n| n.as_str() == *required) {
            return Err(PreprocessingError::ColumnNotFound(required.to_string()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crop_frame() -> DataFrame {
        df![
            "N" => [20.0, 40.0],
            "P" => [20.0, 30.0],
            "K" => [50.0, 45.0],
            "temperature" => [25.0, 22.0],
            "humidity" => [60.0, 70.0],
            "ph" => [6.5, 5.5],
            "rainfall" => [80.0, 120.0],
            "label" => ["rice", "wheat"],
        ]
        .unwrap()
    }

    #[test]
    fn test_ensure_schema_accepts_valid_frame() {
        assert!(ensure_schema(&crop_frame()).is_ok());
    }

    #[test]
    fn test_ensure_schema_rejects_missing_column() {
        let df = crop_frame().drop("ph").unwrap();
        let result = ensure_schema(&df);
        assert!(matches!(
            result,
            Err(PreprocessingError::ColumnNotFound(name)) if name == "ph"
        ));
    }

    #[test]
    fn test_ensure_schema_rejects_missing_label() {
        let df = crop_frame().drop("label").unwrap();
        assert!(matches!(
            ensure_schema(&df),
            Err(PreprocessingError::ColumnNotFound(name)) if name == "label"
        ));
    }

    #[test]
    fn test_ensure_schema_rejects_empty_frame() {
        let df = crop_frame().head(Some(0));
        assert!(matches!(
            ensure_schema(&df),
            Err(PreprocessingError::EmptyDataset)
        ));
    }
}
