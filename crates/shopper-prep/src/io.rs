//! CSV loading and writing.

use crate::error::{CleaningError, Result};
use polars::io::csv::read::{CsvParseOptions, CsvReadOptions};
use polars::prelude::*;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Load a dataset from a CSV file.
///
/// A missing file is a fatal, operator-visible error naming the resolved
/// path. Parsing retries without quote handling when the standard strategy
/// fails, since raw exports occasionally carry malformed quoting.
pub fn read_dataset(path: &Path) -> Result<DataFrame> {
    if !path.exists() {
        return Err(CleaningError::InputNotFound(path.display().to_string()));
    }

    match CsvReadOptions::default()
        .with_infer_schema_length(Some(100))
        .with_has_header(true)
        .with_parse_options(CsvParseOptions::default().with_quote_char(Some(b'"')))
        .try_into_reader_with_file_path(Some(PathBuf::from(path)))?
        .finish()
    {
        Ok(df) => {
            info!("Loaded dataset from {}: {:?}", path.display(), df.shape());
            return Ok(df);
        }
        Err(e) => {
            debug!("Standard CSV loading failed: {}", e);
        }
    }

    let df = CsvReadOptions::default()
        .with_infer_schema_length(Some(100))
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(PathBuf::from(path)))?
        .finish()?;
    info!(
        "Loaded dataset from {} without quote handling: {:?}",
        path.display(),
        df.shape()
    );
    Ok(df)
}

/// Write the cleaned dataset as UTF-8 CSV with a header row and no index
/// column, creating the output directory if absent.
pub fn write_dataset(df: &DataFrame, output_dir: &Path, output_name: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join(output_name);

    let mut file = File::create(&output_path)?;
    let mut df = df.clone();
    CsvWriter::new(&mut file)
        .include_header(true)
        .with_separator(b',')
        .finish(&mut df)
        .map_err(|e| CleaningError::WriteFailed(e.to_string()))?;

    info!("Cleaned dataset saved: {}", output_path.display());
    Ok(output_path)
}
