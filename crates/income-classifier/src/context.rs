//! Immutable model context shared by a prediction run.

use std::path::Path;

use polars::prelude::DataFrame;
use tracing::info;

use income_model::FeatureSchema;

use crate::classifier::IncomeClassifier;
use crate::error::{ConfigError, Result};
use crate::linear::LinearClassifier;

/// A loaded classifier together with the schema it expects.
///
/// Built once at startup and passed by reference; the schema is guaranteed to
/// exist.
#[derive(Debug)]
pub struct ModelContext {
    classifier: Box<dyn IncomeClassifier>,
    schema: FeatureSchema,
}

impl ModelContext {
    pub fn new(classifier: Box<dyn IncomeClassifier>) -> std::result::Result<Self, ConfigError> {
        let schema = classifier
            .feature_schema()
            .cloned()
            .ok_or(ConfigError::MissingSchema)?;
        Ok(Self { classifier, schema })
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    pub fn classifier(&self) -> &dyn IncomeClassifier {
        self.classifier.as_ref()
    }

    pub fn predict(&self, aligned: &DataFrame) -> Result<Vec<u8>> {
        self.classifier.predict(aligned)
    }
}

/// Load a linear model artifact into a [`ModelContext`].
pub fn load_model_context(path: &Path) -> std::result::Result<ModelContext, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::ModelNotFound {
            path: path.to_path_buf(),
        });
    }
    let classifier = LinearClassifier::load(path).map_err(|source| ConfigError::ModelUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let context = ModelContext::new(Box::new(classifier))?;
    info!(
        path = %path.display(),
        model = context.classifier().name(),
        features = context.schema().len(),
        "model loaded"
    );
    Ok(context)
}
