//! Labelled result tables.

use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};
use tracing::debug;

use income_model::{IncomeLabel, PREDICTED_INCOME_COLUMN};

use crate::error::{OutputError, Result};

/// Map predictor classes to income labels.
///
/// Fails on the first class outside `{0, 1}`.
///
/// ```
/// use income_output::map_labels;
///
/// let labels = map_labels(&[0, 1, 1]).unwrap();
/// let text: Vec<&str> = labels.iter().map(|label| label.as_str()).collect();
/// assert_eq!(text, vec!["<=50K", ">50K", ">50K"]);
/// ```
pub fn map_labels(classes: &[u8]) -> Result<Vec<IncomeLabel>> {
    classes
        .iter()
        .map(|class| IncomeLabel::from_class(*class).map_err(OutputError::from))
        .collect()
}

/// Append the `Predicted_Income` column to the filtered upload rows.
///
/// The input frame is left untouched; an existing `Predicted_Income` column
/// is replaced in the returned copy.
pub fn attach_predictions(filtered: &DataFrame, labels: &[IncomeLabel]) -> Result<DataFrame> {
    if labels.len() != filtered.height() {
        return Err(OutputError::CountMismatch {
            rows: filtered.height(),
            predictions: labels.len(),
        });
    }
    let values: Vec<&str> = labels.iter().map(|label| label.as_str()).collect();
    let column = Series::new(PREDICTED_INCOME_COLUMN.into(), values).into_column();

    let mut result = filtered.clone();
    result.with_column(column)?;
    debug!(rows = result.height(), columns = result.width(), "attached predictions");
    Ok(result)
}

/// Number of rows predicted in each bracket, `(<=50K, >50K)`.
pub fn label_counts(labels: &[IncomeLabel]) -> (usize, usize) {
    let above = labels
        .iter()
        .filter(|label| **label == IncomeLabel::Above50K)
        .count();
    (labels.len() - above, above)
}

#[cfg(test)]
mod tests {
    use polars::prelude::Column;

    use super::*;

    fn upload() -> DataFrame {
        let columns: Vec<Column> = vec![
            Series::new("age".into(), vec![Some("39"), Some("50")]).into_column(),
            Series::new("workclass".into(), vec![Some("Private"), None]).into_column(),
        ];
        DataFrame::new(columns).unwrap()
    }

    #[test]
    fn test_unknown_class_fails() {
        let err = map_labels(&[0, 2]).unwrap_err();
        assert!(matches!(err, OutputError::Label(_)));
    }

    #[test]
    fn test_attach_appends_last_column() {
        let labels = map_labels(&[1, 0]).unwrap();
        let result = attach_predictions(&upload(), &labels).unwrap();

        let names: Vec<&str> = result
            .get_column_names()
            .into_iter()
            .map(|name| name.as_str())
            .collect();
        assert_eq!(names, vec!["age", "workclass", PREDICTED_INCOME_COLUMN]);
        let predicted: Vec<Option<&str>> = result
            .column(PREDICTED_INCOME_COLUMN)
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(predicted, vec![Some(">50K"), Some("<=50K")]);
    }

    #[test]
    fn test_attach_rejects_count_mismatch() {
        let labels = map_labels(&[1]).unwrap();
        let err = attach_predictions(&upload(), &labels).unwrap_err();
        assert!(matches!(
            err,
            OutputError::CountMismatch {
                rows: 2,
                predictions: 1
            }
        ));
    }

    #[test]
    fn test_label_counts() {
        let labels = map_labels(&[0, 1, 1, 0, 0]).unwrap();
        assert_eq!(label_counts(&labels), (3, 2));
    }
}
