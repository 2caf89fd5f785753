//! Preprocessing and schema alignment.
//!
//! Steps run in a fixed order because each depends on the previous one:
//! 1. Sentinel replacement in placeholder columns
//! 2. Removal of dropped columns (`fnlwgt`)
//! 3. One-hot expansion of categorical columns
//! 4. Numeric coercion of numerical columns
//! 5. Reindex to the feature schema, filling absent features with 0

use std::collections::HashMap;

use polars::prelude::{Column, DataFrame, DataType, IntoColumn, NamedFrom, Series};
use tracing::{debug, debug_span, warn};

use income_model::{ColumnRole, FeatureSchema, PLACEHOLDER_COLUMNS, SENTINEL_VALUE};

use crate::encoding::expand_categorical;
use crate::error::{Result, TransformError};
use crate::negotiation::{ColumnNegotiation, negotiate};
use crate::normalization::numeric::{coerce_numeric, zero_nan};
use crate::normalization::replace_sentinel;
use crate::types::AlignOptions;

/// Numeric intermediate table produced by steps 1-4.
///
/// Columns keep the order they were produced in: pass-through columns, then
/// numerical columns, then indicators.
#[derive(Debug, Clone, Default)]
pub struct PreprocessedFrame {
    height: usize,
    names: Vec<String>,
    values: HashMap<String, Vec<f64>>,
}

impl PreprocessedFrame {
    fn new(height: usize) -> Self {
        Self {
            height,
            ..Self::default()
        }
    }

    fn insert(&mut self, name: String, values: Vec<f64>) -> Result<()> {
        if values.len() != self.height {
            return Err(TransformError::LengthMismatch {
                column: name,
                expected: self.height,
                actual: values.len(),
            });
        }
        if self.values.insert(name.clone(), values).is_some() {
            warn!(column = %name, "intermediate column produced twice; keeping the last");
        } else {
            self.names.push(name);
        }
        Ok(())
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.values.get(name).map(Vec::as_slice)
    }

    /// Reindex to `schema`: present features are copied, absent ones are 0.
    fn reindex(&self, schema: &FeatureSchema) -> Result<DataFrame> {
        let columns: Vec<Column> = schema
            .iter()
            .map(|feature| {
                let values = match self.values.get(feature) {
                    Some(values) => values.clone(),
                    None => vec![0.0; self.height],
                };
                Series::new(feature.into(), values).into_column()
            })
            .collect();
        Ok(DataFrame::new(columns)?)
    }
}

/// Read a column as optional text, casting non-text columns.
fn text_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = df.column(name)?.cast(&DataType::String)?;
    let values = column
        .str()?
        .into_iter()
        .map(|value| value.map(ToString::to_string))
        .collect();
    Ok(values)
}

/// Read a column as numbers; unparseable or missing cells are 0.
fn numeric_values(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let column = df.column(name)?;
    if column.dtype() == &DataType::String {
        let values = column
            .str()?
            .into_iter()
            .map(coerce_numeric)
            .collect();
        return Ok(values);
    }
    let cast = column.cast(&DataType::Float64)?;
    let values = cast
        .f64()?
        .into_iter()
        .map(|value| value.map_or(0.0, zero_nan))
        .collect();
    Ok(values)
}

/// Run steps 1-4 against an already negotiated upload.
pub fn preprocess(
    raw: &DataFrame,
    negotiation: &ColumnNegotiation,
    options: &AlignOptions,
) -> Result<PreprocessedFrame> {
    let mut frame = PreprocessedFrame::new(raw.height());

    // Uncatalogued columns survive preprocessing untouched apart from the
    // numeric form every aligned feature takes.
    for column in &negotiation.passthrough {
        frame.insert(column.clone(), numeric_values(raw, column)?)?;
    }

    // Dropped columns are never read; numerical columns are coerced in place.
    for column in negotiation.present_with_role(ColumnRole::Numerical) {
        frame.insert(column.to_string(), numeric_values(raw, column)?)?;
    }

    for column in negotiation.present_with_role(ColumnRole::Categorical) {
        let mut values = text_values(raw, column)?;
        if PLACEHOLDER_COLUMNS.contains(&column) {
            let replaced = values
                .iter()
                .filter(|value| value.as_deref() == Some(SENTINEL_VALUE))
                .count();
            if replaced > 0 {
                values = values
                    .iter()
                    .map(|value| replace_sentinel(value.as_deref()).map(ToString::to_string))
                    .collect();
                debug!(column, replaced, "replaced sentinel values");
            }
        }
        let indicators = expand_categorical(column, &values, options.category_order);
        debug!(column, indicators = indicators.len(), "expanded categorical column");
        for (name, indicator) in indicators {
            frame.insert(name, indicator)?;
        }
    }

    Ok(frame)
}

/// Align an upload to `schema` using a negotiation resolved beforehand.
pub fn align_negotiated(
    raw: &DataFrame,
    negotiation: &ColumnNegotiation,
    schema: &FeatureSchema,
    options: &AlignOptions,
) -> Result<DataFrame> {
    let frame = preprocess(raw, negotiation, options)?;
    let aligned = frame.reindex(schema)?;
    debug!(
        rows = aligned.height(),
        features = aligned.width(),
        intermediate = frame.names().len(),
        "aligned to feature schema"
    );
    Ok(aligned)
}

/// Align an uploaded table to a classifier's feature schema.
///
/// The result has exactly the schema's columns, in schema order, as `Float64`,
/// with the upload's row count and row order. Missing or extra upload columns,
/// unseen categories, and malformed numbers never fail; they resolve to 0.
pub fn align(raw: &DataFrame, schema: &FeatureSchema, options: &AlignOptions) -> Result<DataFrame> {
    let span = debug_span!("align", rows = raw.height(), features = schema.len());
    let _guard = span.enter();

    let columns: Vec<String> = raw
        .get_column_names()
        .into_iter()
        .map(ToString::to_string)
        .collect();
    let negotiation = negotiate(&columns, schema);
    align_negotiated(raw, &negotiation, schema, options)
}
