//! Feature schema of a trained classifier.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Ordered feature names a trained classifier expects as input.
///
/// A schema is non-empty and free of duplicates; both are checked on
/// construction so alignment can always produce a well-formed table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct FeatureSchema {
    names: Vec<String>,
    #[serde(skip)]
    positions: HashMap<String, usize>,
}

impl FeatureSchema {
    /// Builds a schema from feature names in model order.
    ///
    /// ```
    /// use income_model::FeatureSchema;
    ///
    /// let schema = FeatureSchema::new(["age", "workclass_Private"]).unwrap();
    /// assert_eq!(schema.len(), 2);
    /// assert_eq!(schema.position("workclass_Private"), Some(1));
    /// assert!(FeatureSchema::new(Vec::<String>::new()).is_err());
    /// ```
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(ModelError::EmptySchema);
        }
        let mut positions = HashMap::with_capacity(names.len());
        for (index, name) in names.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(ModelError::BlankFeature { index });
            }
            if positions.insert(name.clone(), index).is_some() {
                return Err(ModelError::DuplicateFeature { name: name.clone() });
            }
        }
        Ok(Self { names, positions })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false for a constructed schema.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Index of a feature in model order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }
}

impl TryFrom<Vec<String>> for FeatureSchema {
    type Error = ModelError;

    fn try_from(names: Vec<String>) -> Result<Self> {
        Self::new(names)
    }
}

impl From<FeatureSchema> for Vec<String> {
    fn from(schema: FeatureSchema) -> Self {
        schema.names
    }
}

impl<'a> IntoIterator for &'a FeatureSchema {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_duplicates() {
        let err = FeatureSchema::new(["age", "age"]).unwrap_err();
        assert_eq!(
            err,
            ModelError::DuplicateFeature {
                name: "age".to_string()
            }
        );
    }

    #[test]
    fn rejects_blank_names() {
        let err = FeatureSchema::new(["age", " "]).unwrap_err();
        assert_eq!(err, ModelError::BlankFeature { index: 1 });
    }

    #[test]
    fn preserves_order() {
        let schema = FeatureSchema::new(["b", "a", "c"]).unwrap();
        let names: Vec<&str> = schema.iter().collect();
        assert_eq!(names, vec!["b", "a", "c"]);
        assert!(schema.contains("a"));
        assert!(!schema.contains("d"));
    }
}
