//! Core in-memory table representation.
//!
//! A [`Grid`] holds an ordered set of column names and an ordered set of
//! rows; every cell is an explicit tagged [`Value`]. All pipeline stages
//! consume a `Grid` and hand back a new one, so there is never more than
//! one logical owner of the table at a time.

use std::fmt;

/// A single cell value.
///
/// The missing-marker is distinct from an empty string: cleaning may turn
/// textual missing tokens into `Text("")`, which downstream missing counts
/// treat as present.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Textual cell content.
    Text(String),
    /// Numeric cell content.
    Number(f64),
    /// Explicit "no value" marker.
    Missing,
}

impl Value {
    /// Whether this cell is the missing-marker.
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// Numeric content, if any.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Textual content, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// JSON rendering of this cell. Missing becomes `null`; integral
    /// numbers serialize without a fractional part.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Text(s) => serde_json::Value::String(s.clone()),
            Value::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 9.0e15 {
                    serde_json::Value::from(*n as i64)
                } else {
                    serde_json::Number::from_f64(*n)
                        .map(serde_json::Value::Number)
                        .unwrap_or(serde_json::Value::Null)
                }
            }
            Value::Missing => serde_json::Value::Null,
        }
    }
}

impl fmt::Display for Value {
    /// Delimited-text rendering: missing cells serialize as an empty
    /// field, integral numbers without a fractional part.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{s}"),
            Value::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 9.0e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{n}")
                }
            }
            Value::Missing => Ok(()),
        }
    }
}

/// An ordered tabular structure with named columns.
///
/// Invariant: every row has exactly `columns.len()` cells, in column
/// order. Constructors and mutators preserve this.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Grid {
    /// Create an empty grid with the given column names.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Create a grid from column names and pre-built rows.
    ///
    /// Every row must match the column count.
    pub fn from_rows(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == columns.len()));
        Self { columns, rows }
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Ordered column names.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Ordered rows.
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Append a row. The row must match the column count.
    pub fn push_row(&mut self, row: Vec<Value>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    /// Iterate over the cells of one column, in row order.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &Value> {
        self.rows.iter().map(move |row| &row[index])
    }

    /// Count of missing-marker cells in one column.
    pub fn missing_count(&self, index: usize) -> usize {
        self.column_values(index).filter(|v| v.is_missing()).count()
    }

    /// Fraction of missing-marker cells in one column.
    ///
    /// An empty grid has no missing cells, so the fraction is 0.
    pub fn missing_fraction(&self, index: usize) -> f64 {
        if self.rows.is_empty() {
            return 0.0;
        }
        self.missing_count(index) as f64 / self.rows.len() as f64
    }

    /// Replace the column names, preserving cell data.
    pub fn set_columns(&mut self, columns: Vec<String>) {
        debug_assert_eq!(columns.len(), self.columns.len());
        self.columns = columns;
    }

    /// Mutable access to the rows, for in-place column passes.
    pub(crate) fn rows_mut(&mut self) -> &mut [Vec<Value>] {
        &mut self.rows
    }

    /// Return a new grid without the named columns.
    ///
    /// Names not present in the grid are ignored.
    pub fn drop_columns(&self, names: &[String]) -> Grid {
        let keep: Vec<usize> = (0..self.columns.len())
            .filter(|&i| !names.contains(&self.columns[i]))
            .collect();

        let columns = keep.iter().map(|&i| self.columns[i].clone()).collect();
        let rows = self
            .rows
            .iter()
            .map(|row| keep.iter().map(|&i| row[i].clone()).collect())
            .collect();

        Grid { columns, rows }
    }
}
