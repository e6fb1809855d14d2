use thiserror::Error;

/// Errors produced while parsing chart descriptions, shaping input frames,
/// or driving the estimator lifecycle.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed chart description: {0}")]
    Json(#[from] serde_json::Error),
    #[error(
        "Malformed chart description: label '{label}' in chart '{chart_id}' maps {found:?} axes, expected exactly two"
    )]
    AxisCountMismatch {
        chart_id: String,
        label: String,
        found: Vec<String>,
    },
    #[error(
        "Malformed chart description: label '{label}' in chart '{chart_id}' has {x_rings} x ring(s) but {y_rings} y ring(s)"
    )]
    RingCountMismatch {
        chart_id: String,
        label: String,
        x_rings: usize,
        y_rings: usize,
    },
    #[error("Chart '{chart_id}' labels {found:?} disagree with first chart's labels {expected:?}")]
    InconsistentClasses {
        chart_id: String,
        expected: Vec<String>,
        found: Vec<String>,
    },
    #[error("No class labels could be derived: model has no charts or no polygons")]
    EmptyModel,
    #[error("Model has not been fit and refit-on-use is disabled")]
    NotFitted,
    #[error("Feature '{feature}' referenced by a chart is not a column of the input")]
    FeatureNotFound { feature: String },
    #[error("Polygon label '{label}' is not among the fitted classes")]
    UnknownLabel { label: String },
    #[error("Frame has {names} column name(s) but {columns} data column(s)")]
    NameCountMismatch { names: usize, columns: usize },
    #[error("Appended columns have {new_rows} row(s) but the frame has {rows}")]
    RowCountMismatch { rows: usize, new_rows: usize },
}

pub type Result<T> = std::result::Result<T, ModelError>;
