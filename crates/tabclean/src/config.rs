//! Configuration for the processing pipeline.
//!
//! Uses the builder pattern with validation at build time, so an invalid
//! threshold never reaches a pipeline stage.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Policy for filling remaining missing cells after column drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FillMethod {
    /// Forward fill per column, then backward fill for any leading run.
    #[default]
    Ffill,
    /// Replace every missing cell with numeric zero, regardless of
    /// column type.
    Zero,
}

/// Configuration for one pipeline run.
///
/// Use [`ProcessConfig::builder()`] for fluent construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessConfig {
    /// Output directory for all artifacts, created if missing.
    /// Default: "output"
    pub output_dir: PathBuf,

    /// Optional text encoding label for delimited input
    /// (e.g. "utf-8", "latin1"). None means UTF-8 with lossy fallback.
    pub encoding: Option<String>,

    /// Missing-fraction cutoff for dropping columns (0.0 - 1.0).
    /// Columns strictly above this fraction are dropped.
    /// Default: 0.6
    pub drop_threshold: f64,

    /// Missing-value fill policy.
    /// Default: Ffill
    pub fill_method: FillMethod,

    /// Columns restricting duplicate comparison. None means all columns.
    pub dedup_columns: Option<Vec<String>>,

    /// Number of leading rows included in the summary sample.
    /// Default: 5
    pub sample_rows: usize,

    /// Maximum number of histogram images to render.
    /// Default: 3
    pub max_plots: usize,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            encoding: None,
            drop_threshold: 0.6,
            fill_method: FillMethod::default(),
            dedup_columns: None,
            sample_rows: 5,
            max_plots: 3,
        }
    }
}

impl ProcessConfig {
    /// Create a new configuration builder.
    pub fn builder() -> ProcessConfigBuilder {
        ProcessConfigBuilder::default()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !(0.0..=1.0).contains(&self.drop_threshold) {
            return Err(ConfigValidationError::InvalidThreshold {
                field: "drop_threshold".to_string(),
                value: self.drop_threshold,
            });
        }
        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid threshold for '{field}': {value} (must be between 0.0 and 1.0)")]
    InvalidThreshold { field: String, value: f64 },
}

/// Builder for [`ProcessConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct ProcessConfigBuilder {
    output_dir: Option<PathBuf>,
    encoding: Option<String>,
    drop_threshold: Option<f64>,
    fill_method: Option<FillMethod>,
    dedup_columns: Option<Vec<String>>,
    sample_rows: Option<usize>,
    max_plots: Option<usize>,
}

impl ProcessConfigBuilder {
    /// Set the output directory for artifacts.
    pub fn output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(path.into());
        self
    }

    /// Set an explicit text encoding label for delimited input.
    pub fn encoding(mut self, label: impl Into<String>) -> Self {
        self.encoding = Some(label.into());
        self
    }

    /// Set the missing-fraction cutoff for dropping columns.
    ///
    /// # Arguments
    /// * `threshold` - Value between 0.0 and 1.0 (e.g. 0.6 = 60%)
    pub fn drop_threshold(mut self, threshold: f64) -> Self {
        self.drop_threshold = Some(threshold);
        self
    }

    /// Set the missing-value fill policy.
    pub fn fill_method(mut self, method: FillMethod) -> Self {
        self.fill_method = Some(method);
        self
    }

    /// Restrict duplicate comparison to the named columns.
    pub fn dedup_columns(mut self, columns: Vec<String>) -> Self {
        self.dedup_columns = Some(columns);
        self
    }

    /// Set the number of rows included in the summary sample.
    pub fn sample_rows(mut self, rows: usize) -> Self {
        self.sample_rows = Some(rows);
        self
    }

    /// Set the maximum number of histograms to render.
    pub fn max_plots(mut self, plots: usize) -> Self {
        self.max_plots = Some(plots);
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `ProcessConfig` or an error if validation fails.
    pub fn build(self) -> Result<ProcessConfig, ConfigValidationError> {
        let config = ProcessConfig {
            output_dir: self.output_dir.unwrap_or_else(|| PathBuf::from("output")),
            encoding: self.encoding,
            drop_threshold: self.drop_threshold.unwrap_or(0.6),
            fill_method: self.fill_method.unwrap_or_default(),
            dedup_columns: self.dedup_columns,
            sample_rows: self.sample_rows.unwrap_or(5),
            max_plots: self.max_plots.unwrap_or(3),
        };

        config.validate()?;
        Ok(config)
    }
}
