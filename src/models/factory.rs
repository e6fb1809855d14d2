use crate::chart::ChartDescription;
use crate::config::{ModelConfig, ModelKind};
use crate::models::classifier::PolygonClassifier;
use crate::models::estimator_trait::PolygonEstimator;
use crate::models::featurizer::PolygonFeaturizer;
use crate::models::outlier::PolygonOutlierDetector;

/// Build a boxed polygon model from a `ModelConfig`.
/// Currently this is a thin factory implemented as a single function.
pub fn build_model(
    charts: Vec<ChartDescription>,
    config: ModelConfig,
) -> Box<dyn PolygonEstimator> {
    match config.kind {
        ModelKind::Classifier { smoothing } => Box::new(
            PolygonClassifier::new(charts)
                .with_smoothing(smoothing)
                .with_refit(config.refit),
        ),

        ModelKind::OutlierDetector { threshold } => Box::new(
            PolygonOutlierDetector::new(charts)
                .with_threshold(threshold)
                .with_refit(config.refit),
        ),

        ModelKind::Featurizer {} => {
            Box::new(PolygonFeaturizer::new(charts).with_refit(config.refit))
        }
    }
}
