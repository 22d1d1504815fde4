//! Configuration types for the cleaning pipeline.
//!
//! The pipeline has exactly one input file and one output file. The defaults
//! here are the paths the production run uses; the builder exists mainly for
//! library consumers and tests that stage data elsewhere.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default input path, relative to the working directory.
pub const DEFAULT_INPUT_PATH: &str = "Data/customer_shopping_behavior.csv";

/// Default output directory, created on demand.
pub const DEFAULT_OUTPUT_DIR: &str = "output_data";

/// Default output file name.
pub const DEFAULT_OUTPUT_NAME: &str = "customer_shopping_behavior_cleaned.csv";

/// Configuration for the cleaning pipeline.
///
/// Use [`CleaningConfig::builder()`] to override paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleaningConfig {
    /// Path to the input CSV.
    pub input_path: PathBuf,

    /// Directory the cleaned CSV is written into.
    pub output_dir: PathBuf,

    /// File name of the cleaned CSV.
    pub output_name: String,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
        }
    }
}

impl CleaningConfig {
    /// Create a new configuration builder.
    pub fn builder() -> CleaningConfigBuilder {
        CleaningConfigBuilder::default()
    }

    /// Full path of the cleaned output file.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_name)
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.output_name.trim().is_empty() {
            return Err(ConfigValidationError::EmptyOutputName);
        }
        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Output file name must not be empty")]
    EmptyOutputName,
}

/// Builder for [`CleaningConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct CleaningConfigBuilder {
    input_path: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    output_name: Option<String>,
}

impl CleaningConfigBuilder {
    /// Set the input CSV path.
    pub fn input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = Some(path.into());
        self
    }

    /// Set the output directory for the cleaned CSV.
    pub fn output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(path.into());
        self
    }

    /// Set the output file name (with extension).
    pub fn output_name(mut self, name: impl Into<String>) -> Self {
        self.output_name = Some(name.into());
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `CleaningConfig` or an error if validation fails.
    pub fn build(self) -> Result<CleaningConfig, ConfigValidationError> {
        let config = CleaningConfig {
            input_path: self
                .input_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_PATH)),
            output_dir: self
                .output_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            output_name: self
                .output_name
                .unwrap_or_else(|| DEFAULT_OUTPUT_NAME.to_string()),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CleaningConfig::default();
        assert_eq!(config.input_path, PathBuf::from(DEFAULT_INPUT_PATH));
        assert_eq!(config.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
        assert_eq!(
            config.output_path(),
            PathBuf::from("output_data/customer_shopping_behavior_cleaned.csv")
        );
    }

    #[test]
    fn test_builder_defaults() {
        let config = CleaningConfig::builder().build().unwrap();
        assert_eq!(config.output_name, DEFAULT_OUTPUT_NAME);
    }

    #[test]
    fn test_builder_custom_values() {
        let config = CleaningConfig::builder()
            .input_path("fixtures/in.csv")
            .output_dir("/tmp/out")
            .output_name("cleaned.csv")
            .build()
            .unwrap();

        assert_eq!(config.input_path, PathBuf::from("fixtures/in.csv"));
        assert_eq!(config.output_path(), PathBuf::from("/tmp/out/cleaned.csv"));
    }

    #[test]
    fn test_validation_empty_output_name() {
        let result = CleaningConfig::builder().output_name("  ").build();
        assert!(matches!(
            result.unwrap_err(),
            ConfigValidationError::EmptyOutputName
        ));
    }

    #[test]
    fn test_config_serialization() {
        let config = CleaningConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: CleaningConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config.input_path, deserialized.input_path);
        assert_eq!(config.output_name, deserialized.output_name);
    }
}
