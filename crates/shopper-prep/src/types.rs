//! Result types produced by the cleaning pipeline.

use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};

/// Summary of one pipeline run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CleaningSummary {
    /// Row count of the processed table.
    pub rows: usize,

    /// Column count before derivation.
    pub columns_before: usize,

    /// Column count after derivation (appended columns included).
    pub columns_after: usize,

    /// Missing review ratings filled by grouped median imputation.
    pub ratings_filled: usize,

    /// Wall-clock duration of the run in milliseconds.
    pub duration_ms: u64,
}

/// Output of a pipeline run: the cleaned table plus what happened to it.
#[derive(Debug)]
pub struct CleaningOutcome {
    /// The cleaned table.
    pub data: DataFrame,

    /// Human-readable log of the actions each stage took.
    pub steps: Vec<String>,

    /// Aggregate numbers for the run.
    pub summary: CleaningSummary,
}
