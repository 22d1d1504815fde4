//! Derivation stages of the cleaning pipeline.
//!
//! Each stage is a transform from an owned DataFrame to a new DataFrame plus
//! a log of the actions it took. Stages never mutate shared state and skip
//! themselves when the columns they need are absent.

mod age;
mod frequency;
mod rating;

pub use age::{AgeBinner, AgeGroup};
pub use frequency::{days_between_purchases, FrequencyNormalizer};
pub use rating::RatingImputer;
