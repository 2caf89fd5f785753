//! Error types for classifiers and model loading.

use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

use income_model::ModelError;

/// Errors raised by a classifier while loading or predicting.
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// Artifact is not valid JSON for a linear model.
    #[error("invalid model artifact: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read model artifact: {0}")]
    Io(#[from] std::io::Error),

    /// Artifact feature names do not form a valid schema.
    #[error("invalid feature names: {0}")]
    Schema(#[from] ModelError),

    /// Artifact fields are inconsistent with each other.
    #[error("invalid model artifact: {message}")]
    InvalidArtifact { message: String },

    /// Input width differs from the number of model coefficients.
    #[error("expected {expected} feature columns, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Input columns are not the model's features in model order.
    #[error("feature column {position} is '{actual}', expected '{expected}'")]
    ColumnMismatch {
        position: usize,
        expected: String,
        actual: String,
    },

    /// An aligned feature value is infinite or NaN.
    #[error("feature '{column}' is not finite in row {row}")]
    NonFiniteFeature { column: String, row: usize },

    #[error("polars error: {0}")]
    Polars(#[from] PolarsError),
}

/// Errors that prevent a model from being used at all.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("model artifact not found: {path}")]
    ModelNotFound { path: PathBuf },

    #[error("model artifact {path} could not be loaded: {source}")]
    ModelUnreadable {
        path: PathBuf,
        #[source]
        source: ClassifierError,
    },

    /// Classifier does not expose the feature names it was trained on.
    #[error("model does not expose its feature schema")]
    MissingSchema,
}

/// Result type for classifier operations.
pub type Result<T> = std::result::Result<T, ClassifierError>;
