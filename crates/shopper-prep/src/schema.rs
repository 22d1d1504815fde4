//! Column-name normalization.
//!
//! Raw exports carry headers like `Purchase Amount (USD)`. Every downstream
//! stage addresses columns by their canonical name: lower-cased, spaces
//! replaced with underscores, parentheses stripped.

use crate::error::Result;
use polars::prelude::*;
use tracing::debug;

/// Canonical name of the purchase-amount column.
pub const PURCHASE_AMOUNT: &str = "purchase_amount";

/// Raw variants of the purchase-amount header, after canonicalization.
const PURCHASE_AMOUNT_VARIANTS: [&str; 2] = ["purchase_amount_usd", "purchase_amount_(usd)"];

/// Canonicalize a single raw header.
pub fn canonical_header(raw: &str) -> String {
    raw.to_lowercase()
        .replace(' ', "_")
        .replace(['(', ')'], "")
}

/// Normalize all column names of a DataFrame and rename known variants of
/// the purchase-amount column to [`PURCHASE_AMOUNT`].
pub fn normalize_columns(df: DataFrame) -> Result<DataFrame> {
    let mut df = df;

    let canonical: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| canonical_header(name))
        .collect();
    df.set_column_names(canonical)?;

    for variant in PURCHASE_AMOUNT_VARIANTS {
        if df.column(variant).is_ok() {
            df.rename(variant, PURCHASE_AMOUNT.into())?;
            debug!("Renamed column '{}' to '{}'", variant, PURCHASE_AMOUNT);
        }
    }

    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_canonical_header() {
        assert_eq!(canonical_header("Review Rating"), "review_rating");
        assert_eq!(canonical_header("Purchase Amount (USD)"), "purchase_amount_usd");
        assert_eq!(canonical_header("age"), "age");
    }

    #[test]
    fn test_normalize_columns_renames_headers() {
        let df = df![
            "Customer ID" => [1i64, 2],
            "Frequency of Purchases" => ["Weekly", "Annually"],
        ]
        .unwrap();

        let normalized = normalize_columns(df).unwrap();
        let names: Vec<String> = normalized
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(names, vec!["customer_id", "frequency_of_purchases"]);
    }

    #[test]
    fn test_normalize_columns_purchase_amount_variant() {
        let df = df![
            "Purchase Amount (USD)" => [12.5f64, 30.0],
        ]
        .unwrap();

        let normalized = normalize_columns(df).unwrap();
        assert!(normalized.column(PURCHASE_AMOUNT).is_ok());
        assert!(normalized.column("purchase_amount_usd").is_err());
    }

    #[test]
    fn test_normalize_columns_already_underscored_variant() {
        let df = df![
            "purchase_amount_usd" => [12.5f64],
        ]
        .unwrap();

        let normalized = normalize_columns(df).unwrap();
        assert!(normalized.column(PURCHASE_AMOUNT).is_ok());
    }

    #[test]
    fn test_normalize_columns_other_columns_untouched() {
        let df = df![
            "category" => ["Books"],
            "review_rating" => [4.0f64],
        ]
        .unwrap();

        let normalized = normalize_columns(df).unwrap();
        assert!(normalized.column("category").is_ok());
        assert!(normalized.column("review_rating").is_ok());
    }
}
