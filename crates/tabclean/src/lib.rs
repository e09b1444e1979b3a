//! Tabular Cleaning & Reporting Pipeline
//!
//! A one-shot batch processor for tabular data files built with Rust.
//!
//! # Overview
//!
//! This library ingests a single delimited-text or spreadsheet file,
//! applies a fixed cleaning pipeline, removes duplicate rows, and emits
//! a cleaned table plus a human-readable report:
//!
//! - **Loading**: extension-based format detection, CSV/TXT via the
//!   `csv` crate (with optional encoding override), XLS/XLSX via
//!   `calamine`
//! - **Cleaning**: column-name normalization, string-cell trimming,
//!   high-missing column drop, missing-value fill (`ffill` or `zero`)
//! - **Deduplication**: exact-duplicate removal, optionally restricted
//!   to a column subset
//! - **Summarizing**: row/column counts, inferred column types, missing
//!   counts, duplicate count, row sample; JSON and HTML artifacts
//! - **Plotting**: histogram PNGs for the leading numeric columns
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use tabclean::{Pipeline, ProcessConfig, FillMethod};
//! use std::path::Path;
//!
//! let config = ProcessConfig::builder()
//!     .output_dir("output")
//!     .drop_threshold(0.6)
//!     .fill_method(FillMethod::Ffill)
//!     .build()?;
//!
//! let metadata = Pipeline::new(config).run(Path::new("data.csv"))?;
//! println!("Dropped columns: {:?}", metadata.dropped_columns);
//! ```
//!
//! Cell values are an explicit tagged type, [`Value`], with a
//! missing-marker distinct from the empty string; every pipeline stage
//! consumes a [`Grid`] and returns a new one.

pub mod cleaner;
pub mod config;
pub mod dedup;
pub mod error;
pub mod grid;
pub mod loader;
pub mod pipeline;
pub mod plot;
pub mod profiler;
pub mod reporting;
pub mod types;

// Re-exports for convenient access
pub use cleaner::DataCleaner;
pub use config::{ConfigValidationError, FillMethod, ProcessConfig, ProcessConfigBuilder};
pub use dedup::Deduplicator;
pub use error::{ProcessError, Result};
pub use grid::{Grid, Value};
pub use loader::{InputFormat, Loader};
pub use pipeline::Pipeline;
pub use plot::Plotter;
pub use profiler::DataProfiler;
pub use reporting::ReportGenerator;
pub use types::{
    CleaningReport, ColumnProfile, ColumnType, DedupReport, RunMetadata, Summary,
};
