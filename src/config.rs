use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Smoothing constant added to every vote count before normalization.
pub const DEFAULT_SMOOTHING: f64 = 0.001;
/// Minimum total vote count for a row to be considered an inlier.
pub const DEFAULT_THRESHOLD: u32 = 1;

/// Central configuration for models in the crate.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ModelConfig {
    /// Derive fit state on first use instead of requiring an explicit `fit`.
    pub refit: bool,

    #[serde(flatten)]
    pub kind: ModelKind,
}

/// Supported model kinds and their hyper-parameters.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    Classifier { smoothing: f64 },
    OutlierDetector { threshold: u32 },
    Featurizer {},
}

impl Default for ModelKind {
    fn default() -> Self {
        ModelKind::Classifier {
            smoothing: DEFAULT_SMOOTHING,
        }
    }
}

impl FromStr for ModelKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "classifier" => Ok(ModelKind::Classifier {
                smoothing: DEFAULT_SMOOTHING,
            }),
            "outlier" | "outlier_detector" => Ok(ModelKind::OutlierDetector {
                threshold: DEFAULT_THRESHOLD,
            }),
            "featurizer" => Ok(ModelKind::Featurizer {}),
            _ => Err(format!(
                "Unknown model kind: {}. Expected one of classifier, outlier_detector, featurizer",
                s
            )),
        }
    }
}

impl ModelConfig {
    pub fn new(refit: bool, kind: ModelKind) -> Self {
        Self { refit, kind }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            refit: true,
            kind: ModelKind::default(),
        }
    }
}
