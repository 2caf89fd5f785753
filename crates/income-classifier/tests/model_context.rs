//! Model loading and context construction.

use std::fs;

use polars::prelude::DataFrame;
use tempfile::TempDir;

use income_classifier::{
    ClassifierError, ConfigError, IncomeClassifier, LinearArtifact, LinearClassifier,
    ModelContext, load_model_context,
};
use income_model::FeatureSchema;

fn write_artifact(dir: &TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("model.json");
    fs::write(&path, json).unwrap();
    path
}

#[test]
fn loads_artifact_with_feature_names() {
    let dir = TempDir::new().unwrap();
    let artifact = LinearArtifact {
        feature_names: Some(vec!["age".to_string(), "workclass_Others".to_string()]),
        coefficients: vec![0.05, 0.4],
        intercept: -2.0,
        threshold: Some(0.6),
    };
    let path = write_artifact(&dir, &serde_json::to_string(&artifact).unwrap());

    let context = load_model_context(&path).unwrap();

    let names: Vec<&str> = context.schema().iter().collect();
    assert_eq!(names, vec!["age", "workclass_Others"]);
    assert_eq!(context.classifier().name(), "linear");
}

#[test]
fn missing_artifact_is_model_not_found() {
    let dir = TempDir::new().unwrap();

    let err = load_model_context(&dir.path().join("absent.json")).unwrap_err();

    assert!(matches!(err, ConfigError::ModelNotFound { .. }));
}

#[test]
fn corrupt_artifact_is_unreadable() {
    let dir = TempDir::new().unwrap();
    let path = write_artifact(&dir, "{\"coefficients\": [1.0,");

    let err = load_model_context(&path).unwrap_err();

    assert!(matches!(
        err,
        ConfigError::ModelUnreadable {
            source: ClassifierError::Json(_),
            ..
        }
    ));
}

#[test]
fn artifact_without_feature_names_has_no_schema() {
    let dir = TempDir::new().unwrap();
    let path = write_artifact(&dir, r#"{"coefficients": [1.0, 2.0], "intercept": 0.5}"#);

    let err = load_model_context(&path).unwrap_err();

    assert!(matches!(err, ConfigError::MissingSchema));
}

#[derive(Debug)]
struct ConstantClassifier {
    schema: Option<FeatureSchema>,
}

impl IncomeClassifier for ConstantClassifier {
    fn name(&self) -> &str {
        "constant"
    }

    fn feature_schema(&self) -> Option<&FeatureSchema> {
        self.schema.as_ref()
    }

    fn predict(&self, aligned: &DataFrame) -> income_classifier::Result<Vec<u8>> {
        Ok(vec![1; aligned.height()])
    }
}

#[test]
fn context_accepts_any_classifier_with_schema() {
    let schema = FeatureSchema::new(["age"]).unwrap();
    let context = ModelContext::new(Box::new(ConstantClassifier {
        schema: Some(schema.clone()),
    }))
    .unwrap();

    assert_eq!(context.schema(), &schema);
    assert_eq!(context.predict(&DataFrame::empty()).unwrap(), Vec::<u8>::new());

    let err = ModelContext::new(Box::new(ConstantClassifier { schema: None })).unwrap_err();
    assert!(matches!(err, ConfigError::MissingSchema));
}

#[test]
fn load_reports_io_failure_for_directory() {
    let dir = TempDir::new().unwrap();

    let err = LinearClassifier::load(dir.path()).unwrap_err();

    assert!(matches!(err, ClassifierError::Io(_)));
}
