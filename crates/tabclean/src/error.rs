//! Custom error types for the tabular processing pipeline.
//!
//! This module provides the error hierarchy using `thiserror`. Loader
//! failures carry enough information for the CLI to pick a distinct
//! process exit code.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for the processing pipeline.
#[derive(Error, Debug)]
pub enum ProcessError {
    /// Input path does not exist on disk.
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// File extension is not a recognized tabular format.
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    /// The underlying parser failed (malformed content, bad encoding,
    /// unreadable file).
    #[error("Error reading input file {path}: {reason}")]
    ReadError { path: String, reason: String },

    /// A column named in a deduplication subset is not in the table.
    #[error("Column '{0}' not found in table")]
    ColumnNotFound(String),

    /// Histogram rendering failed.
    #[error("Failed to render histogram for column '{column}': {reason}")]
    Render { column: String, reason: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialization error (cleaned table output).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl ProcessError {
    /// Get a stable error code for diagnostics.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InputNotFound(_) => "INPUT_NOT_FOUND",
            Self::UnsupportedFormat(_) => "UNSUPPORTED_FORMAT",
            Self::ReadError { .. } => "READ_ERROR",
            Self::ColumnNotFound(_) => "COLUMN_NOT_FOUND",
            Self::Render { .. } => "RENDER_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Json(_) => "JSON_ERROR",
            Self::Csv(_) => "CSV_ERROR",
        }
    }

    /// Process exit code for this error.
    ///
    /// Loading failures keep the historical codes (2 for a missing input
    /// path, 3 for unsupported formats and parse failures). Failures in
    /// post-load stages all map to 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InputNotFound(_) => 2,
            Self::UnsupportedFormat(_) | Self::ReadError { .. } => 3,
            _ => 1,
        }
    }
}

/// Result type alias for processing operations.
pub type Result<T> = std::result::Result<T, ProcessError>;
