//! Income classifiers and the model context used by a prediction run.
//!
//! A classifier exposes the [`FeatureSchema`](income_model::FeatureSchema) it
//! was trained on and predicts `0`/`1` classes for tables aligned to it.

mod classifier;
mod context;
mod error;
mod linear;

pub use classifier::IncomeClassifier;
pub use context::{ModelContext, load_model_context};
pub use error::{ClassifierError, ConfigError, Result};
pub use linear::{DEFAULT_THRESHOLD, LinearArtifact, LinearClassifier};
