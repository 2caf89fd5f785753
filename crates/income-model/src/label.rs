//! Predicted income bracket.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Name of the column appended to exported results.
pub const PREDICTED_INCOME_COLUMN: &str = "Predicted_Income";

/// Income bracket predicted by the classifier.
///
/// The rendering of each bracket is part of the public output contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncomeLabel {
    /// Class `0`.
    #[serde(rename = "<=50K")]
    AtMost50K,
    /// Class `1`.
    #[serde(rename = ">50K")]
    Above50K,
}

impl IncomeLabel {
    /// Maps a predictor class to its bracket.
    ///
    /// ```
    /// use income_model::IncomeLabel;
    ///
    /// assert_eq!(IncomeLabel::from_class(0).unwrap().as_str(), "<=50K");
    /// assert_eq!(IncomeLabel::from_class(1).unwrap().as_str(), ">50K");
    /// assert!(IncomeLabel::from_class(2).is_err());
    /// ```
    pub fn from_class(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::AtMost50K),
            1 => Ok(Self::Above50K),
            other => Err(ModelError::UnknownClass { value: other }),
        }
    }

    pub fn class(self) -> u8 {
        match self {
            Self::AtMost50K => 0,
            Self::Above50K => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::AtMost50K => "<=50K",
            Self::Above50K => ">50K",
        }
    }
}

impl std::fmt::Display for IncomeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
