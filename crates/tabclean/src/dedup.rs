//! Duplicate row removal.
//!
//! Two rows are duplicates when every cell in the compared column set is
//! equal by value. The first occurrence is kept, in original row order.

use crate::error::{ProcessError, Result};
use crate::grid::{Grid, Value};
use crate::types::DedupReport;
use std::collections::HashSet;
use tracing::{debug, info};

/// Hashable rendering of a cell for row comparison. Numbers key by bit
/// pattern with the sign of zero normalized, which matches value
/// equality for everything the loader produces (finite numbers only).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum CellKey {
    Text(String),
    Number(u64),
    Missing,
}

impl CellKey {
    fn from_value(value: &Value) -> CellKey {
        match value {
            Value::Text(s) => CellKey::Text(s.clone()),
            Value::Number(n) => {
                // -0.0 == 0.0, so both must produce the same key
                let n = if *n == 0.0 { 0.0 } else { *n };
                CellKey::Number(n.to_bits())
            }
            Value::Missing => CellKey::Missing,
        }
    }
}

/// Removes rows that are exact duplicates of an earlier row.
pub struct Deduplicator;

impl Deduplicator {
    /// Deduplicate the grid, comparing the named columns only (all
    /// columns when `subset` is `None`).
    ///
    /// Fails with `ColumnNotFound` if a subset name is not in the grid.
    pub fn deduplicate(grid: Grid, subset: Option<&[String]>) -> Result<(Grid, DedupReport)> {
        let indices = compared_indices(&grid, subset)?;

        let before = grid.height();
        let mut seen: HashSet<Vec<CellKey>> = HashSet::with_capacity(before);
        let mut kept: Vec<Vec<Value>> = Vec::with_capacity(before);

        for row in grid.rows() {
            let key: Vec<CellKey> = indices.iter().map(|&i| CellKey::from_value(&row[i])).collect();
            if seen.insert(key) {
                kept.push(row.clone());
            }
        }

        let removed = before - kept.len();
        if removed > 0 {
            info!("Removed {} duplicate rows", removed);
        } else {
            debug!("No duplicate rows found");
        }

        let deduped = Grid::from_rows(grid.columns().to_vec(), kept);
        Ok((deduped, DedupReport { removed_rows: removed }))
    }

    /// Count rows that duplicate an earlier row, over all columns,
    /// without modifying the grid.
    pub fn count_duplicates(grid: &Grid) -> usize {
        let mut seen: HashSet<Vec<CellKey>> = HashSet::with_capacity(grid.height());
        let mut duplicates = 0;
        for row in grid.rows() {
            let key: Vec<CellKey> = row.iter().map(CellKey::from_value).collect();
            if !seen.insert(key) {
                duplicates += 1;
            }
        }
        duplicates
    }
}

fn compared_indices(grid: &Grid, subset: Option<&[String]>) -> Result<Vec<usize>> {
    match subset {
        None => Ok((0..grid.width()).collect()),
        Some(names) => names
            .iter()
            .map(|name| {
                grid.column_index(name)
                    .ok_or_else(|| ProcessError::ColumnNotFound(name.clone()))
            })
            .collect(),
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

    fn people_grid() -> Grid {
        Grid::from_rows(
            vec!["Name".to_string(), "Age".to_string(), "City".to_string()],
            vec![
                vec![text("Alice"), num(30.0), text("NYC")],
                vec![text("Alice"), num(30.0), text("NYC")],
                vec![text("Alice"), num(31.0), text("LA")],
            ],
        )
    }

    #[test]
    fn test_exact_duplicates_removed_first_kept() {
        let (deduped, report) = Deduplicator::deduplicate(people_grid(), None).unwrap();

        assert_eq!(report.removed_rows, 1);
        assert_eq!(deduped.height(), 2);
        assert_eq!(deduped.rows()[0][1], num(30.0));
        assert_eq!(deduped.rows()[1][1], num(31.0));
    }

    #[test]
    fn test_subset_comparison_ignores_other_columns() {
        let (deduped, report) =
            Deduplicator::deduplicate(people_grid(), Some(&["Name".to_string()])).unwrap();

        // all three rows share the Name, so only the first survives
        assert_eq!(report.removed_rows, 2);
        assert_eq!(deduped.height(), 1);
        assert_eq!(deduped.rows()[0][2], text("NYC"));
    }

    #[test]
    fn test_unknown_subset_column_fails() {
        let err =
            Deduplicator::deduplicate(people_grid(), Some(&["Nope".to_string()])).unwrap_err();
        assert!(matches!(err, ProcessError::ColumnNotFound(name) if name == "Nope"));
    }

    #[test]
    fn test_negative_zero_compares_equal_to_zero() {
        let grid = Grid::from_rows(
            vec!["n".to_string()],
            vec![vec![num(0.0)], vec![num(-0.0)]],
        );
        let (deduped, report) = Deduplicator::deduplicate(grid, None).unwrap();
        assert_eq!(report.removed_rows, 1);
        assert_eq!(deduped.height(), 1);
    }

    #[test]
    fn test_missing_cells_compare_equal() {
        let grid = Grid::from_rows(
            vec!["a".to_string()],
            vec![vec![Value::Missing], vec![Value::Missing]],
        );
        let (deduped, report) = Deduplicator::deduplicate(grid, None).unwrap();
        assert_eq!(report.removed_rows, 1);
        assert_eq!(deduped.height(), 1);
    }

    #[test]
    fn test_dedup_never_increases_rows_and_is_idempotent() {
        let (once, _) = Deduplicator::deduplicate(people_grid(), None).unwrap();
        assert!(once.height() <= 3);

        let (twice, report) = Deduplicator::deduplicate(once.clone(), None).unwrap();
        assert_eq!(report.removed_rows, 0);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_count_duplicates() {
        assert_eq!(Deduplicator::count_duplicates(&people_grid()), 1);

        let (deduped, _) = Deduplicator::deduplicate(people_grid(), None).unwrap();
        assert_eq!(Deduplicator::count_duplicates(&deduped), 0);
    }
}
