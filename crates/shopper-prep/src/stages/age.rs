//! Age cohort derivation.

use crate::error::Result;
use crate::utils::{coerce_to_float, float_values};
use polars::prelude::*;
use tracing::debug;

/// Source column.
pub const AGE: &str = "age";

/// Derived column.
pub const AGE_GROUP: &str = "age_group";

/// Age cohort labels.
///
/// `Unknown` covers missing and non-numeric ages as well as values outside
/// the plausible 0..=200 range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeGroup {
    YoungAdults,
    MiddleAged,
    Senior,
    Unknown,
}

impl AgeGroup {
    /// Label written to the output column.
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeGroup::YoungAdults => "young adults",
            AgeGroup::MiddleAged => "middle aged",
            AgeGroup::Senior => "senior",
            AgeGroup::Unknown => "unknown",
        }
    }

    /// Bin an age value. Right-closed bins, zero included in the first bin.
    pub fn from_age(age: Option<f64>) -> Self {
        match age {
            None => AgeGroup::Unknown,
            Some(a) if (0.0..=34.0).contains(&a) => AgeGroup::YoungAdults,
            Some(a) if a > 34.0 && a <= 64.0 => AgeGroup::MiddleAged,
            Some(a) if a > 64.0 && a <= 200.0 => AgeGroup::Senior,
            Some(_) => AgeGroup::Unknown,
        }
    }
}

/// Derives the `age_group` column from `age`.
pub struct AgeBinner;

impl AgeBinner {
    /// Apply the binning. A no-op when `age` is absent.
    ///
    /// Replaces `age` with its numeric coercion and appends a non-null
    /// `age_group` String column.
    pub fn apply(df: DataFrame) -> Result<(DataFrame, Vec<String>)> {
        if df.column(AGE).is_err() {
            debug!("Skipping age binning: '{}' not present", AGE);
            return Ok((df, Vec::new()));
        }

        let mut df = df;
        let mut steps = Vec::new();

        let coerced = coerce_to_float(df.column(AGE)?.as_materialized_series())?;
        df.replace(AGE, coerced)?;

        let ages = float_values(df.column(AGE)?.as_materialized_series())?;
        let mut unknown_count = 0usize;
        let labels: Vec<&'static str> = ages
            .iter()
            .map(|age| {
                let group = AgeGroup::from_age(*age);
                if group == AgeGroup::Unknown {
                    unknown_count += 1;
                }
                group.as_str()
            })
            .collect();

        df.with_column(Series::new(AGE_GROUP.into(), labels))?;

        steps.push(format!(
            "Derived '{}' from '{}' ({} unknown rows)",
            AGE_GROUP, AGE, unknown_count
        ));
        debug!("Derived '{}' with {} unknown rows", AGE_GROUP, unknown_count);

        Ok((df, steps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn label_at(df: &DataFrame, idx: usize) -> String {
        let value = df.column(AGE_GROUP).unwrap().get(idx).unwrap();
        value.str_value().to_string()
    }

    #[test]
    fn test_bin_boundaries() {
        assert_eq!(AgeGroup::from_age(Some(0.0)), AgeGroup::YoungAdults);
        assert_eq!(AgeGroup::from_age(Some(30.0)), AgeGroup::YoungAdults);
        assert_eq!(AgeGroup::from_age(Some(34.0)), AgeGroup::YoungAdults);
        assert_eq!(AgeGroup::from_age(Some(35.0)), AgeGroup::MiddleAged);
        assert_eq!(AgeGroup::from_age(Some(64.0)), AgeGroup::MiddleAged);
        assert_eq!(AgeGroup::from_age(Some(65.0)), AgeGroup::Senior);
        assert_eq!(AgeGroup::from_age(Some(200.0)), AgeGroup::Senior);
    }

    #[test]
    fn test_out_of_range_and_missing_are_unknown() {
        assert_eq!(AgeGroup::from_age(Some(-1.0)), AgeGroup::Unknown);
        assert_eq!(AgeGroup::from_age(Some(201.0)), AgeGroup::Unknown);
        assert_eq!(AgeGroup::from_age(None), AgeGroup::Unknown);
    }

    #[test]
    fn test_apply_appends_label_column() {
        let df = df![
            AGE => [Some(30i64), Some(64), Some(65), None],
        ]
        .unwrap();

        let (df, steps) = AgeBinner::apply(df).unwrap();

        assert_eq!(label_at(&df, 0), "young adults");
        assert_eq!(label_at(&df, 1), "middle aged");
        assert_eq!(label_at(&df, 2), "senior");
        assert_eq!(label_at(&df, 3), "unknown");
        assert_eq!(df.column(AGE_GROUP).unwrap().null_count(), 0);
        assert!(steps[0].contains("1 unknown"));
    }

    #[test]
    fn test_apply_coerces_string_ages() {
        let df = df![
            AGE => [Some("35"), Some("old"), None],
        ]
        .unwrap();

        let (df, _) = AgeBinner::apply(df).unwrap();

        assert_eq!(df.column(AGE).unwrap().dtype(), &DataType::Float64);
        assert_eq!(label_at(&df, 0), "middle aged");
        assert_eq!(label_at(&df, 1), "unknown");
        assert_eq!(label_at(&df, 2), "unknown");
    }

    #[test]
    fn test_noop_when_age_absent() {
        let df = df![
            "category" => ["Books"],
        ]
        .unwrap();

        let (df, steps) = AgeBinner::apply(df).unwrap();

        assert!(df.column(AGE_GROUP).is_err());
        assert!(steps.is_empty());
    }

    #[test]
    fn test_labels_are_in_vocabulary() {
        let df = df![
            AGE => [Some(-5i64), Some(10), Some(50), Some(90), Some(500), None],
        ]
        .unwrap();

        let (df, _) = AgeBinner::apply(df).unwrap();

        let allowed = ["young adults", "middle aged", "senior", "unknown"];
        for idx in 0..df.height() {
            assert!(allowed.contains(&label_at(&df, idx).as_str()));
        }
    }
}
