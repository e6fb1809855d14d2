//! Polygon-vote classifier.
use std::path::Path;

use ndarray::{Array2, ArrayView1, Axis};

use crate::chart::{polygon_records, ChartDescription};
use crate::config::{ModelConfig, ModelKind, DEFAULT_SMOOTHING};
use crate::data_handling::Frame;
use crate::error::Result;
use crate::io::read_charts;
use crate::models::estimator_trait::{FitState, PolygonEstimator};
use crate::voting::count_hits;

/// Classifier scoring rows by polygon containment votes.
///
/// Every polygon drawn for a class votes for that class when it contains the
/// row's projection onto the polygon's axis pair. Votes are smoothed and
/// normalized into per-class probabilities; the hard label is the
/// highest-probability class.
#[derive(Debug, Clone)]
pub struct PolygonClassifier {
    charts: Vec<ChartDescription>,
    smoothing: f64,
    refit: bool,
    state: FitState,
}

impl PolygonClassifier {
    pub fn new(charts: Vec<ChartDescription>) -> Self {
        PolygonClassifier {
            charts,
            smoothing: DEFAULT_SMOOTHING,
            refit: true,
            state: FitState::new(),
        }
    }

    /// Load the chart descriptions from a JSON document on disk.
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(PolygonClassifier::new(read_charts(path)?))
    }

    /// Smoothing constant added to every count before normalization.
    pub fn with_smoothing(mut self, smoothing: f64) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// Enable or disable refit-on-use. Disabled, unfitted predictions fail
    /// with `NotFitted` instead of deriving fit state on the spot.
    pub fn with_refit(mut self, refit: bool) -> Self {
        self.refit = refit;
        self
    }

    pub fn charts(&self) -> &[ChartDescription] {
        &self.charts
    }

    pub fn smoothing(&self) -> f64 {
        self.smoothing
    }

    /// Per-class probabilities, one row per input row, columns in
    /// `classes()` order.
    ///
    /// Counts are offset by the smoothing constant and divided by the row
    /// total, so each row sums to one and no entry is exactly zero for
    /// positive smoothing.
    pub fn predict_proba(&self, x: &Frame) -> Result<Array2<f64>> {
        let classes = self.state.ensure(&self.charts, self.refit)?;
        let records = polygon_records(&self.charts)?;
        let counts = count_hits(&records, classes, x)?;

        let smoothed = counts.mapv(|c| c as f64 + self.smoothing);
        let row_sums = smoothed.sum_axis(Axis(1)).insert_axis(Axis(1));
        Ok(smoothed / &row_sums)
    }

    /// Hard labels: the highest-probability class per row, ties resolved to
    /// the lowest class index.
    pub fn predict(&self, x: &Frame) -> Result<Vec<String>> {
        let classes = self.state.ensure(&self.charts, self.refit)?;
        let probabilities = self.predict_proba(x)?;
        let labels = probabilities
            .outer_iter()
            .map(|row| classes[stable_argmax(&row)].clone())
            .collect();
        Ok(labels)
    }
}

impl PolygonEstimator for PolygonClassifier {
    fn fit(&mut self, _x: &Frame, _y: Option<&[String]>) -> Result<()> {
        self.state.fit(&self.charts)
    }

    fn is_fitted(&self) -> bool {
        self.state.is_fitted()
    }

    fn classes(&self) -> Option<&[String]> {
        self.state.classes()
    }

    fn hit_counts(&self, x: &Frame) -> Result<Array2<u32>> {
        let classes = self.state.ensure(&self.charts, self.refit)?;
        let records = polygon_records(&self.charts)?;
        count_hits(&records, classes, x)
    }

    fn params(&self) -> ModelConfig {
        ModelConfig::new(
            self.refit,
            ModelKind::Classifier {
                smoothing: self.smoothing,
            },
        )
    }

    fn name(&self) -> &str {
        "polygon classifier"
    }
}

/// Index of the first maximum. Ties and NaNs resolve to the lowest index.
fn stable_argmax(row: &ArrayView1<f64>) -> usize {
    let mut best_idx = 0;
    let mut best_val = f64::NEG_INFINITY;
    for (i, &v) in row.iter().enumerate() {
        if v > best_val {
            best_val = v;
            best_idx = i;
        }
    }
    best_idx
}
