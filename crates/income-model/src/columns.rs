//! Census column catalogue.
//!
//! Every column of the adult census extract the classifier was trained on is
//! tagged with exactly one [`ColumnRole`]. Columns outside the catalogue have no
//! role and flow through preprocessing untouched.

use serde::{Deserialize, Serialize};

/// Categorical source columns, expanded into indicator columns.
pub const CATEGORICAL_COLUMNS: [&str; 8] = [
    "workclass",
    "education",
    "marital-status",
    "occupation",
    "relationship",
    "race",
    "gender",
    "native-country",
];

/// Numerical source columns, coerced to numbers.
pub const NUMERICAL_COLUMNS: [&str; 5] = [
    "age",
    "educational-num",
    "capital-gain",
    "capital-loss",
    "hours-per-week",
];

/// Columns removed before alignment. `fnlwgt` is numerical in the census data
/// dictionary but was excluded from the trained feature set.
pub const DROPPED_COLUMNS: [&str; 1] = ["fnlwgt"];

/// Prediction target.
pub const TARGET_COLUMN: &str = "income";

/// Columns where the census extract marks missing values with [`SENTINEL_VALUE`].
pub const PLACEHOLDER_COLUMNS: [&str; 3] = ["workclass", "occupation", "native-country"];

/// Literal used in the source data for a missing value.
pub const SENTINEL_VALUE: &str = "?";

/// Replacement for [`SENTINEL_VALUE`].
pub const OTHERS_VALUE: &str = "Others";

/// Role a catalogued column plays in preprocessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnRole {
    Categorical,
    Numerical,
    Target,
    Dropped,
}

impl ColumnRole {
    /// Looks up the role of a column by its exact name.
    ///
    /// ```
    /// use income_model::ColumnRole;
    ///
    /// assert_eq!(ColumnRole::lookup("age"), Some(ColumnRole::Numerical));
    /// assert_eq!(ColumnRole::lookup("fnlwgt"), Some(ColumnRole::Dropped));
    /// assert_eq!(ColumnRole::lookup("employee_id"), None);
    /// ```
    pub fn lookup(name: &str) -> Option<Self> {
        if CATEGORICAL_COLUMNS.contains(&name) {
            Some(Self::Categorical)
        } else if NUMERICAL_COLUMNS.contains(&name) {
            Some(Self::Numerical)
        } else if DROPPED_COLUMNS.contains(&name) {
            Some(Self::Dropped)
        } else if name == TARGET_COLUMN {
            Some(Self::Target)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Categorical => "categorical",
            Self::Numerical => "numerical",
            Self::Target => "target",
            Self::Dropped => "dropped",
        }
    }
}

impl std::fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All catalogued columns with their roles, in data-dictionary order.
pub fn catalogued_columns() -> impl Iterator<Item = (&'static str, ColumnRole)> {
    CATEGORICAL_COLUMNS
        .iter()
        .map(|name| (*name, ColumnRole::Categorical))
        .chain(
            NUMERICAL_COLUMNS
                .iter()
                .map(|name| (*name, ColumnRole::Numerical)),
        )
        .chain(DROPPED_COLUMNS.iter().map(|name| (*name, ColumnRole::Dropped)))
        .chain(std::iter::once((TARGET_COLUMN, ColumnRole::Target)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalogued_column_has_one_role() {
        let mut seen = std::collections::BTreeSet::new();
        for (name, role) in catalogued_columns() {
            assert!(seen.insert(name), "{name} catalogued twice");
            assert_eq!(ColumnRole::lookup(name), Some(role));
        }
        assert_eq!(seen.len(), 15);
    }

    #[test]
    fn placeholder_columns_are_categorical() {
        for name in PLACEHOLDER_COLUMNS {
            assert_eq!(ColumnRole::lookup(name), Some(ColumnRole::Categorical));
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(ColumnRole::lookup("Age"), None);
        assert_eq!(ColumnRole::lookup("income"), Some(ColumnRole::Target));
    }
}
