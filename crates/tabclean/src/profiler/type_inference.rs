//! Type inference logic for column analysis.

use crate::grid::Value;
use crate::types::ColumnType;
use once_cell::sync::Lazy;
use regex::Regex;

// Boolean token pattern - compiled once at startup
static BOOLEAN_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(true|false|yes|no)$").expect("Invalid regex: boolean token"));

/// Infer a display type from a column's cell values.
///
/// The heuristic is a simple majority rule over non-missing cells:
/// numeric-majority columns are `Integer` when every number is whole,
/// `Float` otherwise; text-majority columns are `Boolean` when every
/// text cell is a boolean token, `Text` otherwise. A column with no
/// non-missing cells is `Empty`. Deterministic for a given column.
pub(crate) fn infer_column_type<'a, I>(values: I) -> ColumnType
where
    I: Iterator<Item = &'a Value>,
{
    let mut numbers: Vec<f64> = Vec::new();
    let mut text_count = 0usize;
    let mut boolean_text = true;

    for value in values {
        match value {
            Value::Number(n) => numbers.push(*n),
            Value::Text(s) => {
                text_count += 1;
                if !BOOLEAN_TOKEN.is_match(s.trim()) {
                    boolean_text = false;
                }
            }
            Value::Missing => {}
        }
    }

    if numbers.is_empty() && text_count == 0 {
        return ColumnType::Empty;
    }

    if numbers.len() > text_count {
        if numbers.iter().all(|n| n.fract() == 0.0) {
            ColumnType::Integer
        } else {
            ColumnType::Float
        }
    } else if text_count > 0 && boolean_text {
        ColumnType::Boolean
    } else {
        ColumnType::Text
    }
}
