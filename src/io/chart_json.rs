//! Chart-description JSON reader and writer.
//!
//! The document format is the drawing UI's export: a JSON array of charts,
//! each with `chart_id`, axis names `x` and `y`, and a `polygons` object
//! mapping class labels to per-axis ring coordinates. Key order is preserved
//! on both read and write, so a document round-trip leaves class order (and
//! therefore model output order) unchanged.
use std::fs;
use std::path::Path;

use crate::chart::ChartDescription;
use crate::error::Result;

/// Parse a chart-description document from a JSON string.
pub fn charts_from_str(json: &str) -> Result<Vec<ChartDescription>> {
    let charts = serde_json::from_str(json)?;
    Ok(charts)
}

/// Read a chart-description document from a file.
pub fn read_charts<P: AsRef<Path>>(path: P) -> Result<Vec<ChartDescription>> {
    let contents = fs::read_to_string(&path)?;
    let charts: Vec<ChartDescription> = serde_json::from_str(&contents)?;
    log::debug!(
        "Read {} chart(s) from {}",
        charts.len(),
        path.as_ref().display()
    );
    Ok(charts)
}

/// Write a chart-description document to a file, pretty-printed.
pub fn write_charts<P: AsRef<Path>>(path: P, charts: &[ChartDescription]) -> Result<()> {
    let json = serde_json::to_string_pretty(charts)?;
    fs::write(path, json)?;
    Ok(())
}
