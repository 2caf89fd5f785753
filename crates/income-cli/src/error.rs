//! Run error taxonomy.

use polars::prelude::PolarsError;
use thiserror::Error;

use income_classifier::{ClassifierError, ConfigError};
use income_ingest::IngestError;
use income_output::OutputError;
use income_transform::TransformError;

/// Failure while turning a loaded upload into labelled results.
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("row filter failed: {0}")]
    Filter(#[source] PolarsError),

    #[error("alignment failed: {0}")]
    Align(#[from] TransformError),

    #[error("prediction failed: {0}")]
    Predict(#[from] ClassifierError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Why a prediction run stopped.
#[derive(Debug, Error)]
pub enum RunError {
    /// Model missing, unreadable, or without a feature schema.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// Upload could not be read as a CSV table.
    #[error("input error: {0}")]
    Input(#[from] IngestError),

    #[error("processing error: {0}")]
    Processing(#[from] ProcessingError),
}

impl RunError {
    /// Process exit code for this error class.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Configuration(_) => 2,
            Self::Input(_) | Self::Processing(_) => 1,
        }
    }

    /// One-line suggestion shown after the error message.
    pub fn hint(&self) -> &'static str {
        match self {
            Self::Configuration(ConfigError::MissingSchema) => {
                "the model must be saved with its feature names"
            }
            Self::Configuration(_) => "check the --model path points at a linear model artifact",
            Self::Input(_) => "check that the file is a UTF-8 CSV with a header row",
            Self::Processing(_) => "no results were written; check the upload columns and the model",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_exit_codes() {
        let config = RunError::from(ConfigError::MissingSchema);
        assert_eq!(config.exit_code(), 2);

        let input = RunError::from(IngestError::EmptyCsv {
            path: PathBuf::from("adult.csv"),
        });
        assert_eq!(input.exit_code(), 1);

        let processing = RunError::from(ProcessingError::from(OutputError::CountMismatch {
            rows: 2,
            predictions: 1,
        }));
        assert_eq!(processing.exit_code(), 1);
    }

    #[test]
    fn test_messages_carry_class() {
        let err = RunError::from(ConfigError::MissingSchema);
        assert_eq!(
            err.to_string(),
            "configuration error: model does not expose its feature schema"
        );
        assert!(err.hint().contains("feature names"));
    }
}
