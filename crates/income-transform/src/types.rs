//! Alignment configuration.

use serde::{Deserialize, Serialize};

/// Order in which the distinct levels of a categorical column are ranked.
///
/// The first ranked level is the reference level and gets no indicator
/// column, so the choice decides which indicator names exist. It must match
/// the ordering used when the classifier's schema was built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryOrder {
    /// Byte-wise lexicographic order of the level text.
    #[default]
    Lexicographic,
    /// Order of first appearance in the batch.
    FirstSeen,
}

/// Options controlling alignment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignOptions {
    pub category_order: CategoryOrder,
}

impl AlignOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category_order(mut self, order: CategoryOrder) -> Self {
        self.category_order = order;
        self
    }
}
