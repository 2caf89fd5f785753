use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors surfaced by alignment.
///
/// Value-level problems never produce an error; only frame-level polars
/// failures reach the caller.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("polars error: {0}")]
    Polars(#[from] PolarsError),
    #[error("column '{column}' has {actual} rows, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, TransformError>;
