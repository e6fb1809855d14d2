use ndarray::Array2;
use once_cell::sync::OnceCell;

use crate::chart::{derive_classes, ChartDescription};
use crate::config::ModelConfig;
use crate::data_handling::Frame;
use crate::error::{ModelError, Result};

/// The estimator contract shared by the polygon models. It centralizes the
/// lifecycle (fit, fitted-state introspection, raw vote counts, parameter
/// reporting) in the `models` module so model-selection code can drive any
/// model through a trait object.
pub trait PolygonEstimator: Send + Sync {
    /// Derive fit state from the chart descriptions. `x` and `y` are accepted
    /// for pipeline compatibility and ignored; the polygons are the model.
    fn fit(&mut self, x: &Frame, y: Option<&[String]>) -> Result<()>;

    /// Whether fit state has been derived, explicitly or on first use.
    fn is_fitted(&self) -> bool;

    /// Fitted class labels in first-chart document order, `None` before fit.
    fn classes(&self) -> Option<&[String]>;

    /// Raw per-row, per-class vote counts for `x`.
    fn hit_counts(&self, x: &Frame) -> Result<Array2<u32>>;

    /// Current hyper-parameters as a serializable config.
    fn params(&self) -> ModelConfig;

    /// Optional human readable name for the model
    fn name(&self) -> &str {
        "polygon model"
    }
}

/// Write-once fit state: the class label list derived from the charts.
///
/// A model is unfitted until the cell is filled and fitted forever after.
/// Filling goes through `fit` (explicit) or `ensure` (on first use, when
/// refit-on-use is enabled); both derive the same value from the same
/// charts, so the first caller wins and every later call sees identical
/// state. All methods take `&self`.
#[derive(Debug, Clone, Default)]
pub struct FitState {
    classes: OnceCell<Vec<String>>,
}

impl FitState {
    pub fn new() -> Self {
        FitState {
            classes: OnceCell::new(),
        }
    }

    /// Derive and store the class list. Refitting an already-fitted state is
    /// a no-op: the charts are immutable, so the derived value is identical.
    pub fn fit(&self, charts: &[ChartDescription]) -> Result<()> {
        let classes = derive_classes(charts)?;
        let _ = self.classes.set(classes);
        Ok(())
    }

    /// The guard every predict-family method starts with: return the fitted
    /// classes, deriving them on the spot when `refit` allows it.
    pub fn ensure(&self, charts: &[ChartDescription], refit: bool) -> Result<&[String]> {
        if refit {
            self.classes
                .get_or_try_init(|| derive_classes(charts))
                .map(|classes| classes.as_slice())
        } else {
            self.classes
                .get()
                .map(|classes| classes.as_slice())
                .ok_or(ModelError::NotFitted)
        }
    }

    pub fn classes(&self) -> Option<&[String]> {
        self.classes.get().map(|classes| classes.as_slice())
    }

    pub fn is_fitted(&self) -> bool {
        self.classes.get().is_some()
    }
}
