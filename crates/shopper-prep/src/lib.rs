//! Customer Shopping Behavior Cleaning Pipeline
//!
//! A batch data-cleaning transform built with Rust and Polars. It reads one
//! tabular dataset of customer shopping records, normalizes its schema, and
//! derives cleaned fields in a single linear pass:
//!
//! - **Schema normalization**: canonical lower-cased, underscored column
//!   names; known purchase-amount header variants renamed
//! - **Rating imputation**: missing review ratings filled with the median
//!   rating of the row's category group
//! - **Age binning**: ages bucketed into three labeled cohorts with an
//!   explicit "unknown" sentinel for missing or implausible values
//! - **Frequency normalization**: free-text purchase-frequency labels mapped
//!   to a days-between-purchases estimate, with a regex fallback for explicit
//!   rate expressions
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use shopper_prep::{CleaningConfig, CleaningPipeline};
//!
//! // Fixed production paths
//! let outcome = CleaningPipeline::with_defaults().run()?;
//!
//! // Or process an in-memory DataFrame
//! let config = CleaningConfig::builder()
//!     .input_path("fixtures/shopping.csv")
//!     .output_dir("out")
//!     .build()?;
//! let outcome = CleaningPipeline::new(config).run()?;
//!
//! for step in &outcome.steps {
//!     println!("- {}", step);
//! }
//! ```

pub mod config;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod schema;
pub mod stages;
pub mod types;
pub mod utils;

// Re-exports for convenient access
pub use config::{CleaningConfig, CleaningConfigBuilder, ConfigValidationError};
pub use error::{CleaningError, Result as CleaningResult, ResultExt};
pub use pipeline::CleaningPipeline;
pub use schema::normalize_columns;
pub use stages::{days_between_purchases, AgeBinner, AgeGroup, FrequencyNormalizer, RatingImputer};
pub use types::{CleaningOutcome, CleaningSummary};
pub use utils::{clean_numeric_string, coerce_to_float, is_numeric_dtype, parse_numeric_string};
