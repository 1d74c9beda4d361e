//! CSV loading for crop recommendation datasets.

use crate::error::Result;
use polars::io::csv::read::CsvReadOptions;
use polars::prelude::*;
use std::path::Path;
use tracing::info;

/// Read a crop recommendation dataset from a headered CSV file.
///
/// Columns are expected to be `N, P, K, temperature, humidity, ph, rainfall,
/// label`; missing numeric markers parse to nulls and are resolved later by
/// the cleaner. Schema validation happens in [`DataCleaner::clean`], not
/// here, so callers can inspect a malformed frame before cleaning rejects it.
///
/// [`DataCleaner::clean`]: crate::cleaner::DataCleaner::clean
pub fn load_dataset(path: impl AsRef<Path>) -> Result<DataFrame> {
    let path = path.as_ref();

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    info!(
        "Loaded dataset from {}: {} rows x {} columns",
        path.display(),
        df.height(),
        df.width()
    );

    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_dataset_reads_csv() {
        let dir = std::env::temp_dir();
        let path = dir.join("soilsense_loader_test.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "N,P,K,temperature,humidity,ph,rainfall,label").unwrap();
        writeln!(file, "20,20,50,25.0,60.0,6.5,80.0,rice").unwrap();
        writeln!(file, "40,,45,22.0,70.0,5.5,120.0,wheat").unwrap();

        let df = load_dataset(&path).unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 8);
        // The empty P entry parses as null
        assert_eq!(df.column("P").unwrap().null_count(), 1);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_dataset_missing_file_fails() {
        let result = load_dataset("/nonexistent/crops.csv");
        assert!(result.is_err());
    }
}
