//! Summary construction and rendering.

use crate::dedup::Deduplicator;
use crate::error::Result;
use crate::grid::Grid;
use crate::profiler::DataProfiler;
use crate::types::Summary;
use chrono::Local;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Builds a [`Summary`] and writes its artifacts to the output
/// directory.
pub struct ReportGenerator {
    output_dir: PathBuf,
}

impl ReportGenerator {
    /// Create a generator writing into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Summarize a grid: counts, inferred types, missing counts, the
    /// duplicate count of this grid as given, and a bounded row sample.
    pub fn summarize(grid: &Grid, sample_rows: usize) -> Summary {
        let profiles = DataProfiler::profile(grid);

        let mut column_types = serde_json::Map::new();
        let mut missing_per_column = serde_json::Map::new();
        for profile in &profiles {
            column_types.insert(
                profile.name.clone(),
                serde_json::Value::String(profile.inferred_type.to_string()),
            );
            missing_per_column.insert(
                profile.name.clone(),
                serde_json::Value::from(profile.missing_count),
            );
        }

        let sample = grid
            .rows()
            .iter()
            .take(sample_rows)
            .map(|row| {
                grid.columns()
                    .iter()
                    .zip(row.iter())
                    .map(|(name, value)| (name.clone(), value.to_json()))
                    .collect()
            })
            .collect();

        Summary {
            rows: grid.height(),
            columns: grid.width(),
            column_types,
            missing_per_column,
            duplicates: Deduplicator::count_duplicates(grid),
            sample,
        }
    }

    /// Render the HTML view of a summary.
    ///
    /// Minimal valid markup: title, counts, column/type and
    /// column/missing lists, and the sample as a preformatted block.
    pub fn render_html(summary: &Summary) -> String {
        let mut html = Vec::new();
        html.push(
            "<html><head><meta charset='utf-8'><title>Data Processor Report</title></head><body>"
                .to_string(),
        );
        html.push("<h1>Data Processor Report</h1>".to_string());
        html.push(format!(
            "<p><strong>Rows:</strong> {}, <strong>Columns:</strong> {}</p>",
            summary.rows, summary.columns
        ));

        html.push("<h2>Column types</h2><ul>".to_string());
        for (name, label) in &summary.column_types {
            let label = label.as_str().unwrap_or_default();
            html.push(format!("<li><strong>{name}</strong>: {label}</li>"));
        }
        html.push("</ul>".to_string());

        html.push("<h2>Missing values per column</h2><ul>".to_string());
        for (name, count) in &summary.missing_per_column {
            html.push(format!("<li>{name}: {count}</li>"));
        }
        html.push("</ul>".to_string());

        html.push("<h2>Sample rows</h2>".to_string());
        let sample =
            serde_json::to_string_pretty(&summary.sample).unwrap_or_else(|_| "[]".to_string());
        html.push(format!("<pre>{sample}</pre>"));
        html.push(format!(
            "<p><em>Generated at {}</em></p>",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        ));
        html.push("</body></html>".to_string());

        html.join("\n")
    }

    /// Write `summary.json` and `report.html`.
    pub fn write_artifacts(&self, summary: &Summary) -> Result<()> {
        fs::create_dir_all(&self.output_dir)?;

        let json_path = self.output_dir.join("summary.json");
        fs::write(&json_path, serde_json::to_string_pretty(summary)?)?;
        info!("Wrote {}", json_path.display());

        let html_path = self.output_dir.join("report.html");
        fs::write(&html_path, Self::render_html(summary))?;
        info!("Wrote {}", html_path.display());

        Ok(())
    }
}
