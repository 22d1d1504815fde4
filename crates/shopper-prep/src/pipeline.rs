//! The cleaning pipeline driver.
//!
//! Composes the stages into a single linear pass: normalize column names,
//! impute review ratings, bin ages, normalize purchase frequency. Each stage
//! takes an owned DataFrame and returns a new one; nothing is shared between
//! rows beyond the per-category medians computed inside the rating stage.

use crate::config::CleaningConfig;
use crate::error::Result;
use crate::io;
use crate::schema;
use crate::stages::{AgeBinner, FrequencyNormalizer, RatingImputer};
use crate::types::{CleaningOutcome, CleaningSummary};
use polars::prelude::*;
use std::time::Instant;
use tracing::info;

/// The cleaning pipeline.
///
/// # Example
///
/// ```rust,ignore
/// use shopper_prep::{CleaningConfig, CleaningPipeline};
///
/// let pipeline = CleaningPipeline::new(CleaningConfig::default());
/// let outcome = pipeline.run()?;
/// println!("{} rows cleaned", outcome.summary.rows);
/// ```
pub struct CleaningPipeline {
    config: CleaningConfig,
}

// The pipeline holds no thread-bound state and can run on a worker thread.
static_assertions::assert_impl_all!(CleaningPipeline: Send);

impl CleaningPipeline {
    /// Create a pipeline with the given configuration.
    pub fn new(config: CleaningConfig) -> Self {
        Self { config }
    }

    /// Create a pipeline with the fixed production paths.
    pub fn with_defaults() -> Self {
        Self::new(CleaningConfig::default())
    }

    /// The active configuration.
    pub fn config(&self) -> &CleaningConfig {
        &self.config
    }

    /// Load the configured input, process it, and write the cleaned output.
    pub fn run(&self) -> Result<CleaningOutcome> {
        let df = io::read_dataset(&self.config.input_path)?;
        let outcome = self.process(df)?;
        io::write_dataset(&outcome.data, &self.config.output_dir, &self.config.output_name)?;
        Ok(outcome)
    }

    /// Process an in-memory table through all stages.
    pub fn process(&self, df: DataFrame) -> Result<CleaningOutcome> {
        let start_time = Instant::now();
        let mut steps: Vec<String> = Vec::new();

        info!("Starting cleaning pipeline...");

        let rows = df.height();
        let columns_before = df.width();

        info!("Step 1: Normalizing column names...");
        let df = schema::normalize_columns(df)?;

        info!("Step 2: Imputing review ratings...");
        let ratings_missing_before = null_count(&df, "review_rating");
        let (df, rating_steps) = RatingImputer::apply(df)?;
        let ratings_filled =
            ratings_missing_before.saturating_sub(null_count(&df, "review_rating"));
        steps.extend(rating_steps);

        info!("Step 3: Binning ages...");
        let (df, age_steps) = AgeBinner::apply(df)?;
        steps.extend(age_steps);

        info!("Step 4: Normalizing purchase frequency...");
        let (df, frequency_steps) = FrequencyNormalizer::apply(df)?;
        steps.extend(frequency_steps);

        let summary = CleaningSummary {
            rows,
            columns_before,
            columns_after: df.width(),
            ratings_filled,
            duration_ms: start_time.elapsed().as_millis() as u64,
        };

        info!(
            "Cleaning complete: {} rows, {} -> {} columns, {} ratings filled",
            summary.rows, summary.columns_before, summary.columns_after, summary.ratings_filled
        );

        Ok(CleaningOutcome {
            data: df,
            steps,
            summary,
        })
    }
}

/// Null count of a column, zero when the column is absent.
fn null_count(df: &DataFrame, name: &str) -> usize {
    df.column(name).map(|c| c.null_count()).unwrap_or(0)
}
