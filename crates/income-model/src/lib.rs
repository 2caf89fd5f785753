//! Data model for census income prediction.
//!
//! - **columns**: the census column catalogue and each column's [`ColumnRole`]
//! - **schema**: the ordered [`FeatureSchema`] a trained classifier expects
//! - **label**: the fixed [`IncomeLabel`] mapping for predictor output

pub mod columns;
pub mod error;
pub mod label;
pub mod schema;

pub use columns::{
    CATEGORICAL_COLUMNS, ColumnRole, DROPPED_COLUMNS, NUMERICAL_COLUMNS, OTHERS_VALUE,
    PLACEHOLDER_COLUMNS, SENTINEL_VALUE, TARGET_COLUMN, catalogued_columns,
};
pub use error::{ModelError, Result};
pub use label::{IncomeLabel, PREDICTED_INCOME_COLUMN};
pub use schema::FeatureSchema;
