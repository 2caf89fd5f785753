//! Logistic linear classifier loaded from a JSON artifact.
//!
//! Artifact layout:
//!
//! ```json
//! {
//!   "feature_names": ["age", "workclass_Private"],
//!   "coefficients": [0.04, 0.3],
//!   "intercept": -2.1,
//!   "threshold": 0.5
//! }
//! ```
//!
//! `feature_names` and `threshold` are optional. Without feature names the
//! model cannot report the schema it expects.

use std::path::Path;

use polars::prelude::{DataFrame, DataType};
use serde::{Deserialize, Serialize};
use tracing::debug;

use income_model::FeatureSchema;

use crate::classifier::IncomeClassifier;
use crate::error::{ClassifierError, Result};

pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Serialized form of a [`LinearClassifier`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearArtifact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_names: Option<Vec<String>>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
}

/// Binary classifier scoring `sigmoid(intercept + coefficients · row)`.
#[derive(Debug, Clone)]
pub struct LinearClassifier {
    schema: Option<FeatureSchema>,
    coefficients: Vec<f64>,
    intercept: f64,
    threshold: f64,
}

impl LinearClassifier {
    pub fn from_artifact(artifact: LinearArtifact) -> Result<Self> {
        let LinearArtifact {
            feature_names,
            coefficients,
            intercept,
            threshold,
        } = artifact;

        if coefficients.is_empty() {
            return Err(invalid("no coefficients"));
        }
        if let Some(index) = coefficients.iter().position(|c| !c.is_finite()) {
            return Err(invalid(format!("coefficient {index} is not finite")));
        }
        if !intercept.is_finite() {
            return Err(invalid("intercept is not finite"));
        }
        let threshold = threshold.unwrap_or(DEFAULT_THRESHOLD);
        if !(threshold > 0.0 && threshold < 1.0) {
            return Err(invalid(format!("threshold {threshold} is outside (0, 1)")));
        }

        let schema = feature_names.map(FeatureSchema::new).transpose()?;
        if let Some(schema) = &schema
            && schema.len() != coefficients.len()
        {
            return Err(invalid(format!(
                "{} feature names but {} coefficients",
                schema.len(),
                coefficients.len()
            )));
        }

        Ok(Self {
            schema,
            coefficients,
            intercept,
            threshold,
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_artifact(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let classifier = Self::from_json_str(&json)?;
        debug!(
            path = %path.display(),
            features = classifier.coefficients.len(),
            has_schema = classifier.schema.is_some(),
            "loaded linear classifier"
        );
        Ok(classifier)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Probability of the `>50K` class for each row.
    ///
    /// Infinite or NaN feature values fail the whole batch.
    pub fn scores(&self, aligned: &DataFrame) -> Result<Vec<f64>> {
        self.check_columns(aligned)?;

        let mut logits = vec![self.intercept; aligned.height()];
        for (column, coefficient) in aligned.get_columns().iter().zip(&self.coefficients) {
            let values = column.cast(&DataType::Float64)?;
            for (row, (logit, value)) in logits.iter_mut().zip(values.f64()?).enumerate() {
                let value = value.unwrap_or(0.0);
                if !value.is_finite() {
                    return Err(ClassifierError::NonFiniteFeature {
                        column: column.name().to_string(),
                        row,
                    });
                }
                *logit += coefficient * value;
            }
        }
        Ok(logits.into_iter().map(sigmoid).collect())
    }

    fn check_columns(&self, aligned: &DataFrame) -> Result<()> {
        if aligned.width() != self.coefficients.len() {
            return Err(ClassifierError::ShapeMismatch {
                expected: self.coefficients.len(),
                actual: aligned.width(),
            });
        }
        let Some(schema) = &self.schema else {
            return Ok(());
        };
        for (position, (expected, actual)) in schema
            .iter()
            .zip(aligned.get_column_names())
            .enumerate()
        {
            if expected != actual.as_str() {
                return Err(ClassifierError::ColumnMismatch {
                    position,
                    expected: expected.to_string(),
                    actual: actual.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl IncomeClassifier for LinearClassifier {
    fn name(&self) -> &str {
        "linear"
    }

    fn feature_schema(&self) -> Option<&FeatureSchema> {
        self.schema.as_ref()
    }

    fn predict(&self, aligned: &DataFrame) -> Result<Vec<u8>> {
        let classes = self
            .scores(aligned)?
            .into_iter()
            .map(|score| u8::from(score >= self.threshold))
            .collect();
        Ok(classes)
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

fn invalid(message: impl Into<String>) -> ClassifierError {
    ClassifierError::InvalidArtifact {
        message: message.into(),
    }
}
