//! Polygon-vote featurizer: count matrices as derived features.
use std::path::Path;

use ndarray::Array2;

use crate::chart::{polygon_records, ChartDescription};
use crate::config::{ModelConfig, ModelKind};
use crate::data_handling::Frame;
use crate::error::Result;
use crate::io::read_charts;
use crate::models::estimator_trait::{FitState, PolygonEstimator};
use crate::voting::count_hits;

/// Transformer exposing raw vote counts as features for a downstream model,
/// one column per class in fitted order.
#[derive(Debug, Clone)]
pub struct PolygonFeaturizer {
    charts: Vec<ChartDescription>,
    refit: bool,
    state: FitState,
}

impl PolygonFeaturizer {
    pub fn new(charts: Vec<ChartDescription>) -> Self {
        PolygonFeaturizer {
            charts,
            refit: true,
            state: FitState::new(),
        }
    }

    /// Load the chart descriptions from a JSON document on disk.
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(PolygonFeaturizer::new(read_charts(path)?))
    }

    /// Enable or disable refit-on-use. Disabled, unfitted transforms fail
    /// with `NotFitted` instead of deriving fit state on the spot.
    pub fn with_refit(mut self, refit: bool) -> Self {
        self.refit = refit;
        self
    }

    pub fn charts(&self) -> &[ChartDescription] {
        &self.charts
    }

    /// The count matrix as features: `(rows, classes)`, `classes()` order.
    pub fn transform(&self, x: &Frame) -> Result<Array2<u32>> {
        let classes = self.state.ensure(&self.charts, self.refit)?;
        let records = polygon_records(&self.charts)?;
        count_hits(&records, classes, x)
    }

    /// The input frame with one count column per class appended, named by
    /// the class labels. Rows stay aligned by construction.
    pub fn append_counts(&self, x: &Frame) -> Result<Frame> {
        let classes = self.state.ensure(&self.charts, self.refit)?;
        let names = classes.to_vec();
        let counts = self.transform(x)?;
        x.append_columns(&names, counts.mapv(|c| c as f64))
    }
}

impl PolygonEstimator for PolygonFeaturizer {
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
        self.transform(x)
    }

    fn params(&self) -> ModelConfig {
        ModelConfig::new(self.refit, ModelKind::Featurizer {})
    }

    fn name(&self) -> &str {
        "polygon featurizer"
    }
}
