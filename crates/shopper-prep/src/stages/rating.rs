//! Grouped median imputation for the review rating column.

use crate::error::Result;
use crate::utils::{float_values, string_values};
use polars::prelude::*;
use std::collections::HashMap;
use tracing::debug;

/// Grouping key column.
pub const CATEGORY: &str = "category";

/// Column being imputed.
pub const REVIEW_RATING: &str = "review_rating";

/// Fills missing review ratings with the median rating of the row's
/// category group.
///
/// Rows whose category is null belong to no group and are never filled.
/// Groups without any observed rating keep their nulls; no value is
/// fabricated.
pub struct RatingImputer;

impl RatingImputer {
    /// Apply the imputation. A no-op when either column is absent.
    pub fn apply(df: DataFrame) -> Result<(DataFrame, Vec<String>)> {
        if df.column(CATEGORY).is_err() || df.column(REVIEW_RATING).is_err() {
            debug!(
                "Skipping rating imputation: '{}' or '{}' not present",
                CATEGORY, REVIEW_RATING
            );
            return Ok((df, Vec::new()));
        }

        let mut df = df;
        let mut steps = Vec::new();

        let categories = string_values(df.column(CATEGORY)?.as_materialized_series())?;
        let ratings = float_values(df.column(REVIEW_RATING)?.as_materialized_series())?;

        let medians = group_medians(&categories, &ratings);

        let mut filled_count = 0usize;
        let filled: Vec<Option<f64>> = categories
            .iter()
            .zip(ratings.iter())
            .map(|(category, rating)| match rating {
                Some(v) => Some(*v),
                None => {
                    let median = category
                        .as_ref()
                        .and_then(|c| medians.get(c.as_str()).copied());
                    if median.is_some() {
                        filled_count += 1;
                    }
                    median
                }
            })
            .collect();

        df.replace(REVIEW_RATING, Series::new(REVIEW_RATING.into(), filled))?;

        if filled_count > 0 {
            steps.push(format!(
                "Filled {} missing '{}' values with per-'{}' medians",
                filled_count, REVIEW_RATING, CATEGORY
            ));
            debug!("Filled {} missing ratings", filled_count);
        }

        Ok((df, steps))
    }
}

/// Median per category, computed from the observed ratings only.
fn group_medians(
    categories: &[Option<String>],
    ratings: &[Option<f64>],
) -> HashMap<String, f64> {
    let mut groups: HashMap<String, Vec<f64>> = HashMap::new();
    for (category, rating) in categories.iter().zip(ratings.iter()) {
        if let (Some(c), Some(v)) = (category, rating) {
            groups.entry(c.clone()).or_default().push(*v);
        }
    }

    groups
        .into_iter()
        .filter_map(|(category, mut values)| median(&mut values).map(|m| (category, m)))
        .collect()
}

/// Median of a non-empty sample; even-sized samples average the two middle
/// values.
fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        Some(values[mid])
    } else {
        Some((values[mid - 1] + values[mid]) / 2.0)
    }
}
