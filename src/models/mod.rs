pub mod classifier;
pub mod featurizer;
pub mod outlier;

pub mod estimator_trait;
pub mod factory;

pub use classifier::PolygonClassifier;
pub use estimator_trait::{FitState, PolygonEstimator};
pub use factory::build_model;
pub use featurizer::PolygonFeaturizer;
pub use outlier::{PolygonOutlierDetector, INLIER, OUTLIER};
