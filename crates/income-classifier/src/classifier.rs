use std::fmt::Debug;

use polars::prelude::DataFrame;

use income_model::FeatureSchema;

use crate::error::Result;

/// A trained binary income classifier with a fixed input schema.
pub trait IncomeClassifier: Debug {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    /// Feature names the classifier was trained on, in input order.
    ///
    /// `None` when the model cannot report them; such a model cannot be used
    /// for alignment.
    fn feature_schema(&self) -> Option<&FeatureSchema>;

    /// Predict one class (`0` or `1`) per row of an aligned table.
    fn predict(&self, aligned: &DataFrame) -> Result<Vec<u8>>;
}
