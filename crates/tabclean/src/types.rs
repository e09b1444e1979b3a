//! Shared report and metadata types produced by the pipeline stages.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Inferred display type of a column, derived from its cell values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// All numeric values are whole numbers.
    Integer,
    /// Numeric values with a fractional part.
    Float,
    /// Textual values that are all boolean tokens.
    Boolean,
    /// Textual values.
    Text,
    /// No non-missing values to inspect.
    Empty,
}

impl ColumnType {
    /// Whether this type selects the column for histogram plotting.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Integer | ColumnType::Float)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ColumnType::Integer => "integer",
            ColumnType::Float => "float",
            ColumnType::Boolean => "boolean",
            ColumnType::Text => "text",
            ColumnType::Empty => "empty",
        };
        write!(f, "{label}")
    }
}

/// Per-column profiling result used for reporting and plot selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnProfile {
    /// Column name.
    pub name: String,
    /// Inferred display type.
    pub inferred_type: ColumnType,
    /// Count of missing-marker cells (empty strings are present values).
    pub missing_count: usize,
}

/// Columns removed by the cleaning stage for excess missingness.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CleaningReport {
    /// Dropped column names, in original column order.
    pub dropped_columns: Vec<String>,
}

/// Outcome of the deduplication stage.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DedupReport {
    /// Number of rows removed as duplicates of an earlier row.
    pub removed_rows: usize,
}

/// Structured summary of a finalized grid.
///
/// Maps preserve column order (`serde_json` with `preserve_order`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    /// Row count at summarization time.
    pub rows: usize,
    /// Column count at summarization time.
    pub columns: usize,
    /// Column name to inferred type label.
    pub column_types: serde_json::Map<String, serde_json::Value>,
    /// Column name to missing-marker count.
    pub missing_per_column: serde_json::Map<String, serde_json::Value>,
    /// Exact-duplicate row count of the summarized grid.
    pub duplicates: usize,
    /// Leading rows, each a name-to-value mapping in column order.
    pub sample: Vec<serde_json::Map<String, serde_json::Value>>,
}

/// Persisted record of one pipeline run, written once to `meta.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMetadata {
    /// Local wall-clock time the run finished, `YYYY-MM-DD HH:MM:SS`.
    pub generated_at: String,
    /// Input file path as given on the command line.
    pub input: String,
    /// Output directory for all artifacts.
    pub output_dir: String,
    /// Columns dropped by the cleaning stage.
    pub dropped_columns: Vec<String>,
    /// Rows removed by the deduplication stage.
    pub duplicates_removed: usize,
    /// Generated histogram filenames, in selection order.
    pub plots: Vec<String>,
    /// Embedded summary of the final grid.
    pub summary: Summary,
}
