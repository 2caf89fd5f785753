//! Error types for result assembly and export.

use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

use income_model::ModelError;

#[derive(Debug, Error)]
pub enum OutputError {
    /// Predictor returned a class outside the label mapping.
    #[error(transparent)]
    Label(#[from] ModelError),

    /// Prediction count differs from the number of filtered rows.
    #[error("{predictions} predictions for {rows} rows")]
    CountMismatch { rows: usize, predictions: usize },

    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to move results into {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("polars error: {0}")]
    Polars(#[from] PolarsError),
}

pub type Result<T> = std::result::Result<T, OutputError>;
