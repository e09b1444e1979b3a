//! Sanitization passes over column names and string cells.

use crate::grid::{Grid, Value};
use tracing::debug;

/// Textual tokens that stand in for a missing value. Case-sensitive,
/// matched after trimming.
const MISSING_TOKENS: [&str; 2] = ["nan", "None"];

/// Strip leading/trailing whitespace from every column name.
pub(crate) fn normalize_headers(grid: &mut Grid) {
    let trimmed: Vec<String> = grid
        .columns()
        .iter()
        .map(|name| name.trim().to_string())
        .collect();
    grid.set_columns(trimmed);
}

/// Whether the majority of a column's non-missing cells are textual.
pub(crate) fn is_predominantly_textual(grid: &Grid, index: usize) -> bool {
    let mut text = 0usize;
    let mut non_missing = 0usize;
    for value in grid.column_values(index) {
        match value {
            Value::Text(_) => {
                text += 1;
                non_missing += 1;
            }
            Value::Number(_) => non_missing += 1,
            Value::Missing => {}
        }
    }
    non_missing > 0 && text * 2 > non_missing
}

/// Normalize string cells in predominantly-textual columns.
///
/// Every non-missing cell takes its trimmed textual form; a trimmed cell
/// equal to a missing token becomes an empty string. The result is a
/// present-but-empty value, not the missing-marker, so missing counts do
/// not see it. Missing-marker cells pass through untouched.
pub(crate) fn normalize_text_cells(grid: &mut Grid) {
    let textual: Vec<usize> = (0..grid.width())
        .filter(|&i| is_predominantly_textual(grid, i))
        .collect();

    if textual.is_empty() {
        return;
    }
    debug!("Normalizing string cells in {} columns", textual.len());

    for row in grid.rows_mut() {
        for &i in &textual {
            let normalized = match &row[i] {
                Value::Text(s) => {
                    let trimmed = s.trim();
                    if MISSING_TOKENS.contains(&trimmed) {
                        Value::Text(String::new())
                    } else {
                        Value::Text(trimmed.to_string())
                    }
                }
                Value::Number(n) => Value::Text(Value::Number(*n).to_string()),
                Value::Missing => continue,
            };
            row[i] = normalized;
        }
    }
}
