//! Data cleaning stage.
//!
//! Four ordered passes, each over the whole grid before the next begins:
//!
//! 1. Column-name normalization (whitespace trim)
//! 2. String-cell normalization in predominantly-textual columns
//! 3. Drop of columns whose missing-fraction strictly exceeds the
//!    threshold
//! 4. Missing-value fill per the configured [`FillMethod`]
//!
//! Missing-fraction and the column drop see missing-marker cells only;
//! the empty strings produced by pass 2 count as present values.

mod sanitizers;

use crate::config::FillMethod;
use crate::grid::{Grid, Value};
use crate::types::CleaningReport;
use tracing::{debug, info};

/// Data cleaner for automatic table cleaning operations.
pub struct DataCleaner;

impl DataCleaner {
    /// Run the full cleaning pass.
    ///
    /// Returns the cleaned grid and the names of dropped columns.
    pub fn clean(
        &self,
        grid: Grid,
        drop_threshold: f64,
        fill_method: FillMethod,
    ) -> (Grid, CleaningReport) {
        let mut grid = grid;

        info!("Cleaning table ({} rows x {} columns)", grid.height(), grid.width());

        sanitizers::normalize_headers(&mut grid);
        sanitizers::normalize_text_cells(&mut grid);

        // Missing fractions are measured on the pre-fill grid.
        let dropped: Vec<String> = (0..grid.width())
            .filter(|&i| grid.missing_fraction(i) > drop_threshold)
            .map(|i| grid.columns()[i].clone())
            .collect();

        if !dropped.is_empty() {
            info!(
                "Dropping {} columns with missing fraction > {}: {:?}",
                dropped.len(),
                drop_threshold,
                dropped
            );
            grid = grid.drop_columns(&dropped);
        } else {
            debug!("No columns exceed missing fraction {}", drop_threshold);
        }

        fill_missing(&mut grid, fill_method);

        (
            grid,
            CleaningReport {
                dropped_columns: dropped,
            },
        )
    }
}

/// Fill remaining missing cells according to the policy.
fn fill_missing(grid: &mut Grid, method: FillMethod) {
    match method {
        FillMethod::Ffill => {
            for col in 0..grid.width() {
                forward_fill_column(grid, col);
                backward_fill_column(grid, col);
            }
        }
        FillMethod::Zero => {
            for row in grid.rows_mut() {
                for cell in row.iter_mut() {
                    if cell.is_missing() {
                        *cell = Value::Number(0.0);
                    }
                }
            }
        }
    }
}

/// Each missing cell takes the nearest preceding non-missing value.
fn forward_fill_column(grid: &mut Grid, col: usize) {
    let mut last: Option<Value> = None;
    for row in grid.rows_mut() {
        if row[col].is_missing() {
            if let Some(value) = &last {
                row[col] = value.clone();
            }
        } else {
            last = Some(row[col].clone());
        }
    }
}

/// Leading missing runs take the nearest following non-missing value.
fn backward_fill_column(grid: &mut Grid, col: usize) {
    let mut next: Option<Value> = None;
    for row in grid.rows_mut().iter_mut().rev() {
        if row[col].is_missing() {
            if let Some(value) = &next {
                row[col] = value.clone();
            }
        } else {
            next = Some(row[col].clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> Value {
        Value::Text(s.to_string())
    }

    fn num(n: f64) -> Value {
        Value::Number(n)
    }

    fn column_grid(cells: Vec<Value>) -> Grid {
        Grid::from_rows(
            vec!["a".to_string()],
            cells.into_iter().map(|c| vec![c]).collect(),
        )
    }

    #[test]
    fn test_clean_trims_headers() {
        let grid = Grid::from_rows(
            vec![" Name ".to_string()],
            vec![vec![text("Alice")], vec![text("Bob")]],
        );
        let (cleaned, _) = DataCleaner.clean(grid, 0.6, FillMethod::Ffill);
        assert_eq!(cleaned.columns(), &["Name".to_string()]);
    }

    #[test]
    fn test_drop_is_strictly_greater_than_threshold() {
        // exactly at the threshold: 1 missing of 2 rows = 0.5
        let grid = Grid::from_rows(
            vec!["keep".to_string(), "drop".to_string()],
            vec![
                vec![num(1.0), Value::Missing],
                vec![Value::Missing, Value::Missing],
            ],
        );
        let (cleaned, report) = DataCleaner.clean(grid, 0.5, FillMethod::Ffill);

        assert_eq!(report.dropped_columns, vec!["drop".to_string()]);
        assert_eq!(cleaned.columns(), &["keep".to_string()]);
    }

    #[test]
    fn test_fully_missing_column_dropped_at_any_threshold_below_one() {
        let grid = Grid::from_rows(
            vec!["a".to_string(), "b".to_string()],
            vec![
                vec![num(1.0), Value::Missing],
                vec![num(2.0), Value::Missing],
            ],
        );
        let (_, report) = DataCleaner.clean(grid, 0.99, FillMethod::Ffill);
        assert_eq!(report.dropped_columns, vec!["b".to_string()]);
    }

    #[test]
    fn test_fully_missing_column_kept_at_threshold_one() {
        let grid = column_grid(vec![Value::Missing, Value::Missing]);
        let (cleaned, report) = DataCleaner.clean(grid, 1.0, FillMethod::Ffill);
        assert!(report.dropped_columns.is_empty());
        assert_eq!(cleaned.width(), 1);
    }

    #[test]
    fn test_emptied_missing_tokens_do_not_count_as_missing() {
        // "nan" text tokens become empty strings before the drop pass,
        // so the column's missing fraction stays 0
        let grid = column_grid(vec![text("nan"), text("nan"), text("x")]);
        let (cleaned, report) = DataCleaner.clean(grid, 0.5, FillMethod::Ffill);

        assert!(report.dropped_columns.is_empty());
        assert_eq!(cleaned.rows()[0][0], text(""));
    }

    #[test]
    fn test_ffill_forward_then_backward() {
        let grid = column_grid(vec![
            Value::Missing,
            num(1.0),
            Value::Missing,
            Value::Missing,
            num(4.0),
        ]);
        let (cleaned, _) = DataCleaner.clean(grid, 1.0, FillMethod::Ffill);

        let got: Vec<Value> = cleaned.column_values(0).cloned().collect();
        // leading gap backward-filled, interior gaps forward-filled
        assert_eq!(got, vec![num(1.0), num(1.0), num(1.0), num(1.0), num(4.0)]);
    }

    #[test]
    fn test_ffill_all_missing_column_stays_missing() {
        let grid = column_grid(vec![Value::Missing, Value::Missing]);
        let (cleaned, _) = DataCleaner.clean(grid, 1.0, FillMethod::Ffill);
        assert!(cleaned.column_values(0).all(Value::is_missing));
    }

    #[test]
    fn test_ffill_full_column_unchanged() {
        let grid = column_grid(vec![num(1.0), num(2.0), num(3.0)]);
        let (cleaned, _) = DataCleaner.clean(grid, 0.6, FillMethod::Ffill);
        let got: Vec<Value> = cleaned.column_values(0).cloned().collect();
        assert_eq!(got, vec![num(1.0), num(2.0), num(3.0)]);
    }

    #[test]
    fn test_zero_fill_ignores_column_type() {
        let grid = Grid::from_rows(
            vec!["t".to_string(), "n".to_string()],
            vec![
                vec![text("x"), num(1.0)],
                vec![text("y"), num(2.0)],
                vec![Value::Missing, Value::Missing],
            ],
        );
        let (cleaned, _) = DataCleaner.clean(grid, 1.0, FillMethod::Zero);

        assert_eq!(cleaned.rows()[2][0], num(0.0));
        assert_eq!(cleaned.rows()[2][1], num(0.0));
    }

    #[test]
    fn test_clean_is_idempotent() {
        let grid = Grid::from_rows(
            vec![" Name ".to_string(), "Age".to_string()],
            vec![
                vec![text(" Alice "), num(30.0)],
                vec![text("nan"), Value::Missing],
                vec![text("Bob"), num(25.0)],
            ],
        );

        let (once, _) = DataCleaner.clean(grid, 0.6, FillMethod::Ffill);
        let (twice, report_twice) = DataCleaner.clean(once.clone(), 0.6, FillMethod::Ffill);

        assert_eq!(once, twice);
        assert!(report_twice.dropped_columns.is_empty());
    }
}
