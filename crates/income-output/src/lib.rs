//! Result assembly and export.
//!
//! Predictor classes become [`IncomeLabel`](income_model::IncomeLabel)s, are
//! appended to the filtered upload rows as `Predicted_Income`, and the result
//! is written as CSV.

mod error;
mod export;
mod results;

pub use error::{OutputError, Result};
pub use export::{DEFAULT_RESULTS_FILE_NAME, ExportOptions, write_results_csv};
pub use results::{attach_predictions, label_counts, map_labels};
