//! Polygon-vote outlier detector.
use std::path::Path;

use ndarray::Array2;

use crate::chart::{polygon_records, ChartDescription};
use crate::config::{ModelConfig, ModelKind, DEFAULT_THRESHOLD};
use crate::data_handling::Frame;
use crate::error::Result;
use crate::io::read_charts;
use crate::models::estimator_trait::{FitState, PolygonEstimator};
use crate::voting::count_hits;

/// Label for rows whose total vote count falls below the threshold.
pub const OUTLIER: i32 = -1;
/// Label for rows with enough votes.
pub const INLIER: i32 = 1;

/// Outlier detector treating the drawn polygons as the region of normal
/// data: a row is an outlier when too few polygons, summed over all classes,
/// contain it.
#[derive(Debug, Clone)]
pub struct PolygonOutlierDetector {
    charts: Vec<ChartDescription>,
    threshold: u32,
    refit: bool,
    state: FitState,
}

impl PolygonOutlierDetector {
    pub fn new(charts: Vec<ChartDescription>) -> Self {
        PolygonOutlierDetector {
            charts,
            threshold: DEFAULT_THRESHOLD,
            refit: true,
            state: FitState::new(),
        }
    }

    /// Load the chart descriptions from a JSON document on disk.
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(PolygonOutlierDetector::new(read_charts(path)?))
    }

    /// Minimum total vote count for a row to stay an inlier. With the
    /// default of 1, any single containing polygon suffices.
    pub fn with_threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
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

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Raw per-class vote counts, unsmoothed and unnormalized.
    pub fn score(&self, x: &Frame) -> Result<Array2<u32>> {
        let classes = self.state.ensure(&self.charts, self.refit)?;
        let records = polygon_records(&self.charts)?;
        count_hits(&records, classes, x)
    }

    /// `OUTLIER` (-1) for rows whose vote total over all classes is strictly
    /// below the threshold, `INLIER` (1) otherwise.
    pub fn predict(&self, x: &Frame) -> Result<Vec<i32>> {
        let counts = self.score(x)?;
        let labels = counts
            .outer_iter()
            .map(|row| {
                let total: u32 = row.sum();
                if total < self.threshold {
                    OUTLIER
                } else {
                    INLIER
                }
            })
            .collect();
        Ok(labels)
    }
}

impl PolygonEstimator for PolygonOutlierDetector {
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
        self.score(x)
    }

    fn params(&self) -> ModelConfig {
        ModelConfig::new(
            self.refit,
            ModelKind::OutlierDetector {
                threshold: self.threshold,
            },
        )
    }

    fn name(&self) -> &str {
        "polygon outlier detector"
    }
}
