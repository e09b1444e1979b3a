//! Sequential pipeline driver.
//!
//! Wires the stages in order: load, clean, deduplicate, write the
//! cleaned table, summarize, plot, then persist the run metadata.
//! Execution is strictly linear and single-threaded; the grid's
//! ownership transfers wholly from stage to stage. Partial outputs are
//! left in place when a later stage fails.

use crate::cleaner::DataCleaner;
use crate::config::ProcessConfig;
use crate::dedup::Deduplicator;
use crate::error::{ProcessError, Result};
use crate::grid::Grid;
use crate::loader::Loader;
use crate::plot::Plotter;
use crate::profiler::DataProfiler;
use crate::reporting::ReportGenerator;
use crate::types::RunMetadata;
use chrono::Local;
use std::fs;
use std::path::Path;
use tracing::info;

/// One-shot batch pipeline over a single input file.
pub struct Pipeline {
    config: ProcessConfig,
}

impl Pipeline {
    /// Create a pipeline with the given configuration.
    pub fn new(config: ProcessConfig) -> Self {
        Self { config }
    }

    /// Run the pipeline end to end and write all artifacts.
    ///
    /// The output directory is created up front; the input existence
    /// check happens before any artifact is written inside it.
    pub fn run(&self, input: &Path) -> Result<RunMetadata> {
        let outdir = &self.config.output_dir;
        fs::create_dir_all(outdir)?;

        if !input.exists() {
            return Err(ProcessError::InputNotFound(input.to_path_buf()));
        }

        info!("Loading dataset from: {}", input.display());
        let grid = Loader::load(input, self.config.encoding.as_deref())?;
        info!("Dataset loaded: {} rows x {} columns", grid.height(), grid.width());

        let (grid, cleaning) = DataCleaner.clean(
            grid,
            self.config.drop_threshold,
            self.config.fill_method,
        );

        let (grid, dedup) =
            Deduplicator::deduplicate(grid, self.config.dedup_columns.as_deref())?;

        let cleaned_path = outdir.join("cleaned.csv");
        write_delimited(&grid, &cleaned_path)?;
        info!("Wrote {}", cleaned_path.display());

        let summary = ReportGenerator::summarize(&grid, self.config.sample_rows);
        ReportGenerator::new(outdir).write_artifacts(&summary)?;

        let profiles = DataProfiler::profile(&grid);
        let plots = Plotter::new(outdir, self.config.max_plots).plot(&grid, &profiles)?;

        let metadata = RunMetadata {
            generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            input: input.display().to_string(),
            output_dir: outdir.display().to_string(),
            dropped_columns: cleaning.dropped_columns,
            duplicates_removed: dedup.removed_rows,
            plots,
            summary,
        };

        let meta_path = outdir.join("meta.json");
        fs::write(&meta_path, serde_json::to_string_pretty(&metadata)?)?;
        info!("Processing complete. Output saved to: {}", outdir.display());

        Ok(metadata)
    }
}

/// Serialize a grid as delimited text: one header row plus data rows,
/// no index column. Missing cells serialize as empty fields.
fn write_delimited(grid: &Grid, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(grid.columns())?;
    for row in grid.rows() {
        writer.write_record(row.iter().map(|v| v.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Value;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_write_delimited() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let grid = Grid::from_rows(
            vec!["name".to_string(), "age".to_string()],
            vec![
                vec![Value::Text("Alice".to_string()), Value::Number(30.0)],
                vec![Value::Text("Bob".to_string()), Value::Missing],
            ],
        );
        write_delimited(&grid, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "name,age\nAlice,30\nBob,\n");
    }
}
