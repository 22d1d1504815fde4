//! Shared utilities for the cleaning pipeline.
//!
//! Numeric coercion helpers used by the derivation stages. Coercion never
//! fails: values that cannot be interpreted as numbers become null, matching
//! the contract of every stage that consumes them.

use polars::prelude::*;

/// Characters commonly used in numeric formatting that should be stripped.
pub const NUMERIC_FORMAT_CHARS: [char; 4] = [',', '$', '%', ' '];

/// Check if a DataType is numeric (integer or float).
#[inline]
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Clean a string for numeric parsing by removing formatting characters.
pub fn clean_numeric_string(s: &str) -> String {
    let mut result = s.trim().to_string();
    for c in NUMERIC_FORMAT_CHARS {
        result = result.replace(c, "");
    }
    result
}

/// Try to parse a string as a numeric value (f64).
///
/// Handles common formatting like currency symbols and thousands separators.
pub fn parse_numeric_string(s: &str) -> Option<f64> {
    let cleaned = clean_numeric_string(s);
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

/// Coerce a Series to Float64.
///
/// Numeric columns are cast directly. String columns are parsed value by
/// value; anything unparseable becomes null. Other dtypes produce an all-null
/// column of the same length.
pub fn coerce_to_float(series: &Series) -> PolarsResult<Series> {
    if is_numeric_dtype(series.dtype()) {
        return series.cast(&DataType::Float64);
    }

    if series.dtype() == &DataType::String {
        let str_series = series.str()?;
        let values: Vec<Option<f64>> = str_series
            .into_iter()
            .map(|opt| opt.and_then(parse_numeric_string))
            .collect();
        return Ok(Series::new(series.name().clone(), values));
    }

    let nulls: Vec<Option<f64>> = vec![None; series.len()];
    Ok(Series::new(series.name().clone(), nulls))
}

/// Extract a column's values as optional owned strings.
///
/// Non-string columns are cast to String first, so numeric category keys
/// still group correctly. Nulls stay `None`.
pub fn string_values(series: &Series) -> PolarsResult<Vec<Option<String>>> {
    let str_series = series.cast(&DataType::String)?;
    let str_chunked = str_series.str()?;
    Ok(str_chunked
        .into_iter()
        .map(|opt| opt.map(|v| v.to_string()))
        .collect())
}

/// Extract a column's values as optional f64 after coercion.
pub fn float_values(series: &Series) -> PolarsResult<Vec<Option<f64>>> {
    let coerced = coerce_to_float(series)?;
    let floats = coerced.f64()?;
    Ok(floats.into_iter().collect())
}
