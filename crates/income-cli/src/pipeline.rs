//! Batch prediction pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Model**: load the classifier and its feature schema
//! 2. **Ingest**: read the uploaded CSV with every column as text
//! 3. **Filter**: drop rows whose `workclass` is excluded
//! 4. **Align**: drop the target, negotiate columns, align to the schema
//! 5. **Predict**: classify aligned rows and map classes to labels
//! 6. **Export**: write the filtered rows plus `Predicted_Income`
//!
//! Results exist in full before anything is written, so a failing batch
//! produces no output file.

use std::path::{Path, PathBuf};

use polars::prelude::{BooleanChunked, DataFrame, DataType, PolarsResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span, trace, warn};

use income_classifier::{ModelContext, load_model_context};
use income_ingest::{CsvUpload, IngestOptions, read_csv_table};
use income_model::{IncomeLabel, TARGET_COLUMN};
use income_output::{ExportOptions, attach_predictions, label_counts, map_labels, write_results_csv};
use income_transform::{AlignOptions, ColumnNegotiation, align_negotiated, negotiate};

use crate::error::{ProcessingError, RunError};
use crate::logging::redact_value;

/// Workclass values excluded from prediction by default.
pub const DEFAULT_EXCLUDED_WORKCLASS: [&str; 2] = ["Without-pay", "Never-worked"];

const WORKCLASS_COLUMN: &str = "workclass";

// ============================================================================
// Options
// ============================================================================

/// Rows removed before alignment, keyed on `workclass`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowFilter {
    pub excluded_workclass: Vec<String>,
}

impl Default for RowFilter {
    fn default() -> Self {
        Self {
            excluded_workclass: DEFAULT_EXCLUDED_WORKCLASS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

impl RowFilter {
    /// A filter that keeps every row.
    pub fn disabled() -> Self {
        Self {
            excluded_workclass: Vec::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.excluded_workclass.is_empty()
    }

    fn excludes(&self, workclass: &str) -> bool {
        self.excluded_workclass
            .iter()
            .any(|excluded| excluded == workclass)
    }

    /// Remove excluded rows, returning the kept rows and the removed count.
    ///
    /// Rows with a missing `workclass` are kept, and a table without a
    /// `workclass` column passes through unchanged.
    pub fn apply(&self, df: &DataFrame) -> PolarsResult<(DataFrame, usize)> {
        if !self.is_enabled() {
            return Ok((df.clone(), 0));
        }
        let Ok(column) = df.column(WORKCLASS_COLUMN) else {
            debug!("no workclass column, row filter skipped");
            return Ok((df.clone(), 0));
        };
        let column = column.cast(&DataType::String)?;
        let mask: BooleanChunked = column
            .str()?
            .into_iter()
            .enumerate()
            .map(|(row, value)| match value {
                Some(value) if self.excludes(value) => {
                    trace!(row, workclass = redact_value(value), "row excluded");
                    false
                }
                _ => true,
            })
            .collect();
        let kept = df.filter(&mask)?;
        let removed = df.height() - kept.height();
        Ok((kept, removed))
    }
}

/// Options for one batch, independent of where the upload comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchOptions {
    pub row_filter: RowFilter,
    pub align: AlignOptions,
}

/// Everything needed to run a prediction from files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    pub input: PathBuf,
    pub model: PathBuf,
    pub ingest: IngestOptions,
    pub batch: BatchOptions,
    pub export: ExportOptions,
    /// Predict and report without writing the results file.
    pub dry_run: bool,
}

impl PredictRequest {
    pub fn new(input: impl Into<PathBuf>, model: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            model: model.into(),
            ingest: IngestOptions::default(),
            batch: BatchOptions::default(),
            export: ExportOptions::default(),
            dry_run: false,
        }
    }
}

// ============================================================================
// Results
// ============================================================================

/// Outcome of predicting one loaded upload.
#[derive(Debug)]
pub struct BatchResult {
    /// Upload rows kept by the row filter, all original columns.
    pub filtered: DataFrame,
    pub removed_rows: usize,
    pub negotiation: ColumnNegotiation,
    /// One label per filtered row, in row order.
    pub labels: Vec<IncomeLabel>,
    /// `filtered` with `Predicted_Income` appended.
    pub results: DataFrame,
}

impl BatchResult {
    /// Prediction counts as `(<=50K, >50K)`.
    pub fn label_counts(&self) -> (usize, usize) {
        label_counts(&self.labels)
    }
}

/// Outcome of a full run from files.
#[derive(Debug)]
pub struct PredictionRun {
    pub upload: CsvUpload,
    pub batch: BatchResult,
    pub schema_len: usize,
    /// Path of the written results file; `None` for a dry run.
    pub output: Option<PathBuf>,
}

// ============================================================================
// Stages
// ============================================================================

/// Drop the target column if present; the upload itself is not modified.
pub fn drop_target(df: &DataFrame) -> PolarsResult<DataFrame> {
    if df.get_column_index(TARGET_COLUMN).is_some() {
        debug!(column = TARGET_COLUMN, "dropped target column before alignment");
        df.drop(TARGET_COLUMN)
    } else {
        Ok(df.clone())
    }
}

fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .into_iter()
        .map(ToString::to_string)
        .collect()
}

fn log_negotiation(negotiation: &ColumnNegotiation) {
    for (feature, source) in &negotiation.features {
        debug!(feature = %feature, source = %source.describe(), "feature source");
    }
    if !negotiation.shadowed.is_empty() {
        warn!(
            columns = %negotiation.shadowed.join(", "),
            "upload columns named like generated indicators are ignored"
        );
    }
    let unresolved: Vec<&str> = negotiation.unresolved().collect();
    if !unresolved.is_empty() {
        warn!(
            count = unresolved.len(),
            features = %unresolved.join(", "),
            "schema features without a matching upload column are filled with 0"
        );
    }
}

/// Filter, align, predict, and label one loaded upload.
pub fn run_batch(
    raw: &DataFrame,
    context: &ModelContext,
    options: &BatchOptions,
) -> Result<BatchResult, ProcessingError> {
    let (filtered, removed_rows) = options
        .row_filter
        .apply(raw)
        .map_err(ProcessingError::Filter)?;
    info!(kept = filtered.height(), removed = removed_rows, "row filter applied");

    let features = drop_target(&filtered).map_err(ProcessingError::Filter)?;
    let negotiation = negotiate(&column_names(&features), context.schema());
    log_negotiation(&negotiation);

    let aligned = align_negotiated(&features, &negotiation, context.schema(), &options.align)?;
    info!(
        rows = aligned.height(),
        features = aligned.width(),
        resolved = negotiation.resolved_count(),
        "aligned upload to model schema"
    );

    let classes = context.predict(&aligned)?;
    let labels = map_labels(&classes)?;
    let results = attach_predictions(&filtered, &labels)?;
    info!(predictions = labels.len(), "predictions complete");

    Ok(BatchResult {
        filtered,
        removed_rows,
        negotiation,
        labels,
        results,
    })
}

/// Write a batch's results to `path`.
pub fn export_results(batch: &BatchResult, path: &Path) -> Result<usize, ProcessingError> {
    Ok(write_results_csv(&batch.results, path)?)
}

/// Run a full prediction: model, upload, batch, and export.
pub fn predict_file(request: &PredictRequest) -> Result<PredictionRun, RunError> {
    let span = info_span!("predict", input = %request.input.display());
    let _guard = span.enter();

    let context = load_model_context(&request.model)?;
    let upload = read_csv_table(&request.input, &request.ingest)?;
    let batch = run_batch(&upload.frame, &context, &request.batch)?;

    let output = if request.dry_run {
        info!("dry run, results not written");
        None
    } else {
        let path = request.export.resolve(&request.input);
        export_results(&batch, &path)?;
        Some(path)
    };

    Ok(PredictionRun {
        upload,
        batch,
        schema_len: context.schema().len(),
        output,
    })
}
