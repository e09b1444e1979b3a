//! Histogram rendering for numeric columns.
//!
//! For each selected column a PNG is written into the output directory,
//! named `hist_<n>_<column>.png` with a 1-based index.

use crate::error::{ProcessError, Result};
use crate::grid::Grid;
use crate::types::ColumnProfile;
use plotters::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Number of equal-width bins per histogram.
const BIN_COUNT: usize = 10;

/// Renders histograms for the leading numeric columns of a grid.
pub struct Plotter {
    output_dir: PathBuf,
    max_plots: usize,
}

impl Plotter {
    /// Create a plotter writing into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>, max_plots: usize) -> Self {
        Self {
            output_dir: output_dir.into(),
            max_plots,
        }
    }

    /// Render one histogram per selected column.
    ///
    /// Selects the first `max_plots` columns (in grid column order)
    /// whose inferred type is numeric, and returns the generated
    /// filenames in selection order.
    pub fn plot(&self, grid: &Grid, profiles: &[ColumnProfile]) -> Result<Vec<String>> {
        fs::create_dir_all(&self.output_dir)?;

        let selected: Vec<&ColumnProfile> = profiles
            .iter()
            .filter(|p| p.inferred_type.is_numeric())
            .take(self.max_plots)
            .collect();

        let mut plots = Vec::with_capacity(selected.len());
        for (i, profile) in selected.iter().enumerate() {
            let Some(index) = grid.column_index(&profile.name) else {
                continue;
            };
            let values: Vec<f64> = grid
                .column_values(index)
                .filter_map(|v| v.as_number())
                .collect();

            if values.is_empty() {
                warn!("Column '{}' has no numeric values, skipping plot", profile.name);
                continue;
            }

            let filename = format!("hist_{}_{}.png", i + 1, profile.name);
            let path = self.output_dir.join(&filename);
            draw_histogram(&path, &profile.name, &values).map_err(|e| ProcessError::Render {
                column: profile.name.clone(),
                reason: e.to_string(),
            })?;

            debug!("Wrote {}", path.display());
            plots.push(filename);
        }

        Ok(plots)
    }
}

/// Split values into equal-width bins over their observed range.
///
/// A constant column gets a single-value range widened by half a unit on
/// each side so the chart area stays non-degenerate.
fn bin_values(values: &[f64]) -> (f64, f64, Vec<u32>) {
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let (lo, hi) = if (max - min).abs() < f64::EPSILON {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    };

    let width = (hi - lo) / BIN_COUNT as f64;
    let mut counts = vec![0u32; BIN_COUNT];
    for &v in values {
        let mut bin = ((v - lo) / width) as usize;
        if bin >= BIN_COUNT {
            bin = BIN_COUNT - 1;
        }
        counts[bin] += 1;
    }
    (lo, hi, counts)
}

fn draw_histogram(
    path: &Path,
    column: &str,
    values: &[f64],
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let (lo, hi, counts) = bin_values(values);
    let y_max = counts.iter().copied().max().unwrap_or(0) + 1;
    let bin_width = (hi - lo) / BIN_COUNT as f64;

    let root = BitMapBackend::new(path, (640, 480)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("Histogram: {column}"), ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(lo..hi, 0u32..y_max)?;

    chart.configure_mesh().draw()?;

    chart.draw_series(counts.iter().enumerate().map(|(i, &count)| {
        let x0 = lo + i as f64 * bin_width;
        let x1 = x0 + bin_width;
        Rectangle::new([(x0, 0u32), (x1, count)], BLUE.filled())
    }))?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Value;
    use crate::profiler::DataProfiler;
    use pretty_assertions::assert_eq;

    fn numeric_grid() -> Grid {
        Grid::from_rows(
            vec!["name".to_string(), "age".to_string(), "score".to_string()],
            vec![
                vec![
                    Value::Text("a".to_string()),
                    Value::Number(30.0),
                    Value::Number(1.5),
                ],
                vec![
                    Value::Text("b".to_string()),
                    Value::Number(25.0),
                    Value::Number(2.5),
                ],
            ],
        )
    }

    #[test]
    fn test_bin_values_counts_all() {
        let values = vec![1.0, 2.0, 3.0, 4.0, 10.0];
        let (lo, hi, counts) = bin_values(&values);
        assert_eq!(lo, 1.0);
        assert_eq!(hi, 10.0);
        assert_eq!(counts.iter().sum::<u32>(), 5);
        // maximum lands in the last bin
        assert_eq!(counts[BIN_COUNT - 1], 1);
    }

    #[test]
    fn test_bin_values_constant_column() {
        let values = vec![4.0, 4.0, 4.0];
        let (lo, hi, counts) = bin_values(&values);
        assert!(lo < 4.0 && hi > 4.0);
        assert_eq!(counts.iter().sum::<u32>(), 3);
    }

    #[test]
    fn test_plot_selects_numeric_columns_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let grid = numeric_grid();
        let profiles = DataProfiler::profile(&grid);

        let plots = Plotter::new(dir.path(), 3).plot(&grid, &profiles).unwrap();
        assert_eq!(
            plots,
            vec!["hist_1_age.png".to_string(), "hist_2_score.png".to_string()]
        );
        for name in &plots {
            assert!(dir.path().join(name).exists());
        }
    }

    #[test]
    fn test_plot_respects_max_plots() {
        let dir = tempfile::tempdir().unwrap();
        let grid = numeric_grid();
        let profiles = DataProfiler::profile(&grid);

        let plots = Plotter::new(dir.path(), 1).plot(&grid, &profiles).unwrap();
        assert_eq!(plots, vec!["hist_1_age.png".to_string()]);
    }

    #[test]
    fn test_plot_no_numeric_columns() {
        let dir = tempfile::tempdir().unwrap();
        let grid = Grid::from_rows(
            vec!["name".to_string()],
            vec![vec![Value::Text("a".to_string())]],
        );
        let profiles = DataProfiler::profile(&grid);

        let plots = Plotter::new(dir.path(), 3).plot(&grid, &profiles).unwrap();
        assert!(plots.is_empty());
    }
}
