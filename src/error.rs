//! Ошибки ML модуля

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MlError {
    #[error("feature column {column} has zero variance in training data")]
    DegenerateFeature { column: usize },

    #[error("insufficient data: need at least {needed} rows, got {got}")]
    InsufficientData { needed: usize, got: usize },

    #[error("missing required feature: {name}")]
    MissingFeature { name: String },

    #[error("metric undefined: targets have zero variance")]
    UndefinedMetric,

    #[error("not fitted yet")]
    NotFitted,

    #[error("empty dataset")]
    EmptyDataset,

    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("linear system is singular")]
    SingularSystem,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
