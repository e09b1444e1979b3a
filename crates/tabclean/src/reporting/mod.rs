//! Report generation for a finalized grid.
//!
//! Produces the structured [`Summary`](crate::types::Summary) plus its
//! two artifacts: `summary.json` and `report.html`.

mod generator;

pub use generator::ReportGenerator;
