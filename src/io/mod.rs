//! IO utilities for chart-description documents.

pub mod chart_json;

pub use chart_json::{charts_from_str, read_charts, write_charts};
