//! One-hot expansion of categorical columns.
//!
//! Each categorical column becomes one indicator per distinct observed level,
//! except the first ranked level, which is the implicit reference.

use std::collections::{BTreeSet, HashSet};

use crate::types::CategoryOrder;

/// Name of the indicator column for one level of a categorical column.
///
/// ```
/// use income_transform::indicator_name;
///
/// assert_eq!(indicator_name("workclass", "Others"), "workclass_Others");
/// ```
pub fn indicator_name(column: &str, level: &str) -> String {
    format!("{column}_{level}")
}

/// Distinct non-missing levels of a column, ranked by `order`.
///
/// ```
/// use income_transform::{CategoryOrder, ordered_levels};
///
/// let values = [Some("b"), None, Some("a"), Some("b")];
/// assert_eq!(ordered_levels(&values, CategoryOrder::Lexicographic), vec!["a", "b"]);
/// assert_eq!(ordered_levels(&values, CategoryOrder::FirstSeen), vec!["b", "a"]);
/// ```
pub fn ordered_levels<S: AsRef<str>>(values: &[Option<S>], order: CategoryOrder) -> Vec<String> {
    let observed = values.iter().filter_map(|value| value.as_ref().map(AsRef::<str>::as_ref));
    match order {
        CategoryOrder::Lexicographic => observed
            .collect::<BTreeSet<&str>>()
            .into_iter()
            .map(ToString::to_string)
            .collect(),
        CategoryOrder::FirstSeen => {
            let mut seen = HashSet::new();
            observed
                .filter(|level| seen.insert(*level))
                .map(ToString::to_string)
                .collect()
        }
    }
}

/// Expand a categorical column into indicator columns, reference level dropped.
///
/// Missing cells are 0 in every indicator.
pub(crate) fn expand_categorical<S: AsRef<str>>(
    column: &str,
    values: &[Option<S>],
    order: CategoryOrder,
) -> Vec<(String, Vec<f64>)> {
    let levels = ordered_levels(values, order);
    levels
        .iter()
        .skip(1)
        .map(|level| {
            let indicator = values
                .iter()
                .map(|value| match value {
                    Some(value) if value.as_ref() == level.as_str() => 1.0,
                    _ => 0.0,
                })
                .collect();
            (indicator_name(column, level), indicator)
        })
        .collect()
}
