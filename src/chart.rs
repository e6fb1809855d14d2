//! Chart descriptions and their conversion into pooled polygon records.
//!
//! A `ChartDescription` is the serialized output of an interactive drawing
//! session: one scatterplot with named axes and, per class label, the rings
//! drawn for that class. `polygon_records` flattens a list of charts into the
//! flat record list the vote counter consumes.
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::geometry::{Point, Polygon};

/// Ring coordinates per axis: axis name -> list of rings -> coordinate list.
pub type AxisCoords = IndexMap<String, Vec<Vec<f64>>>;

/// One drawn chart: an axis pair plus the polygons drawn on it, keyed by
/// class label. Label order in the document is meaningful (the first chart's
/// order defines the class order of every model output), so the maps are
/// insertion-ordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDescription {
    /// Identifier assigned by the drawing session.
    pub chart_id: String,
    /// Feature plotted on the horizontal axis.
    #[serde(rename = "x")]
    pub x_axis: String,
    /// Feature plotted on the vertical axis.
    #[serde(rename = "y")]
    pub y_axis: String,
    /// Class label -> per-axis ring coordinates.
    pub polygons: IndexMap<String, AxisCoords>,
}

impl ChartDescription {
    /// Start an empty chart over the given axis pair.
    pub fn new(chart_id: &str, x_axis: &str, y_axis: &str) -> Self {
        ChartDescription {
            chart_id: chart_id.to_string(),
            x_axis: x_axis.to_string(),
            y_axis: y_axis.to_string(),
            polygons: IndexMap::new(),
        }
    }

    /// Register a class label with no rings yet. Label order of the first
    /// chart becomes the class order of the fitted model.
    pub fn add_class(&mut self, label: &str) {
        let mut coords = AxisCoords::new();
        coords.insert(self.x_axis.clone(), Vec::new());
        coords.insert(self.y_axis.clone(), Vec::new());
        self.polygons.entry(label.to_string()).or_insert(coords);
    }

    /// Append one ring for `label`, given as parallel x/y coordinate lists.
    pub fn add_ring(&mut self, label: &str, xs: &[f64], ys: &[f64]) {
        let x_axis = self.x_axis.clone();
        let y_axis = self.y_axis.clone();
        let coords = self
            .polygons
            .entry(label.to_string())
            .or_insert_with(AxisCoords::new);
        coords.entry(x_axis).or_insert_with(Vec::new).push(xs.to_vec());
        coords.entry(y_axis).or_insert_with(Vec::new).push(ys.to_vec());
    }
}

/// One drawn ring, resolved to a concrete polygon on a concrete axis pair.
#[derive(Debug, Clone)]
pub struct PolygonRecord {
    /// Feature name the polygon's x coordinates live on.
    pub x_axis: String,
    /// Feature name the polygon's y coordinates live on.
    pub y_axis: String,
    pub polygon: Polygon,
    /// Class label the ring votes for.
    pub label: String,
    /// Chart the ring came from.
    pub chart_id: String,
}

/// Derive the class label list from a chart set: the first chart's labels in
/// document order, after checking every other chart carries the same label
/// set (order may differ chart to chart).
pub fn derive_classes(charts: &[ChartDescription]) -> Result<Vec<String>> {
    let first = charts.first().ok_or(ModelError::EmptyModel)?;
    let classes: Vec<String> = first.polygons.keys().cloned().collect();
    if classes.is_empty() {
        return Err(ModelError::EmptyModel);
    }

    for chart in &charts[1..] {
        let same_set = chart.polygons.len() == classes.len()
            && classes.iter().all(|label| chart.polygons.contains_key(label));
        if !same_set {
            return Err(ModelError::InconsistentClasses {
                chart_id: chart.chart_id.clone(),
                expected: classes,
                found: chart.polygons.keys().cloned().collect(),
            });
        }
    }

    log::debug!(
        "Derived {} class label(s) from {} chart(s): {:?}",
        classes.len(),
        charts.len(),
        classes
    );
    Ok(classes)
}

/// Flatten a chart set into pooled polygon records.
///
/// Rebuilt from the descriptions on every call; nothing is cached, so edits
/// to the chart list are always picked up. Per label, the axis map must hold
/// exactly two entries (first = x, second = y) with equally many rings on
/// each. Within a ring the coordinate lists are zipped, truncating to the
/// shorter; rings left with fewer than three points are skipped.
pub fn polygon_records(charts: &[ChartDescription]) -> Result<Vec<PolygonRecord>> {
    let mut records = Vec::new();

    for chart in charts {
        for (label, coords) in &chart.polygons {
            let mut entries = coords.iter();
            let ((x_axis, x_rings), (y_axis, y_rings)) =
                match (entries.next(), entries.next(), entries.next()) {
                    (Some(x), Some(y), None) => (x, y),
                    _ => {
                        return Err(ModelError::AxisCountMismatch {
                            chart_id: chart.chart_id.clone(),
                            label: label.clone(),
                            found: coords.keys().cloned().collect(),
                        })
                    }
                };

            if x_rings.len() != y_rings.len() {
                return Err(ModelError::RingCountMismatch {
                    chart_id: chart.chart_id.clone(),
                    label: label.clone(),
                    x_rings: x_rings.len(),
                    y_rings: y_rings.len(),
                });
            }

            if *x_axis != chart.x_axis || *y_axis != chart.y_axis {
                log::warn!(
                    "Chart '{}' declares axes ({}, {}) but label '{}' is drawn on ({}, {}); using the label's axes",
                    chart.chart_id,
                    chart.x_axis,
                    chart.y_axis,
                    label,
                    x_axis,
                    y_axis
                );
            }

            for (xs, ys) in x_rings.iter().zip(y_rings.iter()) {
                let vertices: Vec<Point> = xs
                    .iter()
                    .zip(ys.iter())
                    .map(|(&x, &y)| Point::new(x, y))
                    .collect();

                if vertices.len() < 3 {
                    log::debug!(
                        "Skipping degenerate ring with {} point(s) for label '{}' in chart '{}'",
                        vertices.len(),
                        label,
                        chart.chart_id
                    );
                    continue;
                }

                records.push(PolygonRecord {
                    x_axis: x_axis.clone(),
                    y_axis: y_axis.clone(),
                    polygon: Polygon::new(vertices),
                    label: label.clone(),
                    chart_id: chart.chart_id.clone(),
                });
            }
        }
    }

    Ok(records)
}
