//! Report output
//!
//! Three ways out of the tool: a human-readable text report, a JSON
//! document, and CSV exports with timestamped file names.

pub mod csv;
pub mod json;
pub mod text;

pub use json::AnalysisReport;
