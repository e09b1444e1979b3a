//! Column profiling: per-column type inference and missing counts.
//!
//! Profiles are recomputed whenever a grid is finalized for reporting;
//! nothing here is carried between pipeline stages.

mod type_inference;

use crate::grid::Grid;
use crate::types::ColumnProfile;
use tracing::debug;

/// Profiles a grid's columns for reporting and plot selection.
pub struct DataProfiler;

impl DataProfiler {
    /// Profile every column, in grid column order.
    pub fn profile(grid: &Grid) -> Vec<ColumnProfile> {
        let profiles: Vec<ColumnProfile> = (0..grid.width())
            .map(|i| ColumnProfile {
                name: grid.columns()[i].clone(),
                inferred_type: type_inference::infer_column_type(grid.column_values(i)),
                missing_count: grid.missing_count(i),
            })
            .collect();

        debug!("Profiled {} columns", profiles.len());
        profiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Value;
    use crate::types::ColumnType;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_profile_columns_in_order() {
        let grid = Grid::from_rows(
            vec!["name".to_string(), "score".to_string()],
            vec![
                vec![Value::Text("a".to_string()), Value::Number(1.5)],
                vec![Value::Text("b".to_string()), Value::Missing],
            ],
        );

        let profiles = DataProfiler::profile(&grid);
        assert_eq!(profiles.len(), 2);

        assert_eq!(profiles[0].name, "name");
        assert_eq!(profiles[0].inferred_type, ColumnType::Text);
        assert_eq!(profiles[0].missing_count, 0);

        assert_eq!(profiles[1].name, "score");
        assert_eq!(profiles[1].inferred_type, ColumnType::Float);
        assert_eq!(profiles[1].missing_count, 1);
    }

    #[test]
    fn test_empty_string_is_not_missing() {
        let grid = Grid::from_rows(
            vec!["a".to_string()],
            vec![vec![Value::Text(String::new())], vec![Value::Missing]],
        );

        let profiles = DataProfiler::profile(&grid);
        assert_eq!(profiles[0].missing_count, 1);
    }
}
