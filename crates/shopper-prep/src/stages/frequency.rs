//! Purchase frequency normalization.
//!
//! Maps free-text labels such as "Weekly" or "Every 3 Months" to an integer
//! estimate of days between purchases. Keyword matching runs first; labels
//! with an explicit rate ("2 per month", "3/week") fall back to a regex
//! parser.

use crate::error::Result;
use crate::utils::string_values;
use once_cell::sync::Lazy;
use polars::prelude::*;
use regex::Regex;
use tracing::debug;

/// Source column.
pub const FREQUENCY_OF_PURCHASES: &str = "frequency_of_purchases";

/// Derived column.
pub const PURCHASE_FREQUENCY_DAYS: &str = "purchase_frequency_days";

/// Explicit rate expressions: a count, a separator, and a unit word.
static RATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)\s*(per|/|per\s)\s*(month|year|week|day|quarter)")
        .expect("hard-coded rate pattern compiles")
});

/// Keyword buckets tested in priority order; the first containing substring
/// wins. "weekly" precedes the fortnight bucket, so labels like "Bi-Weekly"
/// resolve to 7.
const KEYWORD_DAYS: [(&[&str], i64); 6] = [
    (&["daily"], 1),
    (&["weekly"], 7),
    (&["fortnight", "biweekly", "fortnightly"], 14),
    (&["monthly", "month"], 30),
    (&["quarter"], 90),
    (&["annual", "year", "annually", "yearly"], 365),
];

/// Convert a purchase-frequency label to days between purchases.
///
/// The label is trimmed and lower-cased before matching. Returns `None` for
/// text neither phase recognizes. Results are always at least 1, so the
/// derived column only ever holds positive integers or nulls. Ties in the
/// fallback arithmetic round half to even.
pub fn days_between_purchases(label: &str) -> Option<i64> {
    let normalized = label.trim().to_lowercase();

    for (keywords, days) in KEYWORD_DAYS {
        if keywords.iter().any(|kw| normalized.contains(kw)) {
            return Some(days);
        }
    }

    let caps = RATE_PATTERN.captures(&normalized)?;
    let n: i64 = caps[1].parse().ok()?;
    if n == 0 {
        return None;
    }

    let days_per_unit = match &caps[3] {
        "day" => 1.0,
        "week" => 7.0,
        "month" => 30.0,
        "year" => 365.0,
        // "quarter" is recognized by the pattern but has no agreed formula;
        // such labels stay unparsed pending product clarification.
        _ => return None,
    };

    let days = (days_per_unit / n as f64).round_ties_even() as i64;
    Some(days.max(1))
}

/// Derives the `purchase_frequency_days` column from
/// `frequency_of_purchases`.
pub struct FrequencyNormalizer;

impl FrequencyNormalizer {
    /// Apply the normalization.
    ///
    /// When the source column is absent, an all-null Int64 column of the same
    /// height is appended so the output schema is stable.
    pub fn apply(df: DataFrame) -> Result<(DataFrame, Vec<String>)> {
        let mut df = df;
        let mut steps = Vec::new();

        if df.column(FREQUENCY_OF_PURCHASES).is_err() {
            debug!(
                "'{}' not present, appending all-null '{}'",
                FREQUENCY_OF_PURCHASES, PURCHASE_FREQUENCY_DAYS
            );
            let nulls = Series::full_null(
                PURCHASE_FREQUENCY_DAYS.into(),
                df.height(),
                &DataType::Int64,
            );
            df.with_column(nulls)?;
            steps.push(format!(
                "'{}' missing; '{}' filled with nulls",
                FREQUENCY_OF_PURCHASES, PURCHASE_FREQUENCY_DAYS
            ));
            return Ok((df, steps));
        }

        let labels = string_values(df.column(FREQUENCY_OF_PURCHASES)?.as_materialized_series())?;
        let mut unparsed_count = 0usize;
        let days: Vec<Option<i64>> = labels
            .iter()
            .map(|label| match label {
                Some(text) => {
                    let parsed = days_between_purchases(text);
                    if parsed.is_none() {
                        unparsed_count += 1;
                    }
                    parsed
                }
                None => None,
            })
            .collect();

        df.with_column(Series::new(PURCHASE_FREQUENCY_DAYS.into(), days))?;

        steps.push(format!(
            "Derived '{}' from '{}' ({} labels unparsed)",
            PURCHASE_FREQUENCY_DAYS, FREQUENCY_OF_PURCHASES, unparsed_count
        ));
        debug!(
            "Derived '{}' with {} unparsed labels",
            PURCHASE_FREQUENCY_DAYS, unparsed_count
        );

        Ok((df, steps))
    }
}
