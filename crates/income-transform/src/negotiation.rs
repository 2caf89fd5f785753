//! Schema negotiation.
//!
//! Resolves, once per upload, which catalogued columns are present and which
//! input backs each schema feature. Preprocessing consumes the result instead
//! of probing the frame for columns as it goes.
//!
//! A present categorical column owns every `<column>_<level>` name: an
//! uncatalogued upload column with such a name is shadowed and never read.
//!
//! Feature resolution priority (highest to lowest):
//! 1. `<categorical>_<level>` indicator name of a present categorical column
//! 2. Exact match with an unshadowed uncatalogued upload column (pass-through)
//! 3. Numerical column name
//! 4. Unresolved (dropped column, target, or no matching input)

use std::collections::BTreeMap;

use income_model::{CATEGORICAL_COLUMNS, ColumnRole, FeatureSchema, catalogued_columns};
use serde::Serialize;

/// Whether an expected column is part of the upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    Present,
    Absent,
}

impl Presence {
    fn of(present: bool) -> Self {
        if present { Self::Present } else { Self::Absent }
    }

    pub fn is_present(self) -> bool {
        matches!(self, Self::Present)
    }
}

/// Input backing a schema feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeatureSource {
    /// Coerced value of a present numerical column.
    Numerical { column: String },
    /// Indicator for one level of a present categorical column.
    ///
    /// The indicator is still all zeros when the level is not observed in the
    /// batch or is the dropped reference level.
    Indicator { column: String, level: String },
    /// Uncatalogued upload column copied through with numeric coercion.
    Passthrough { column: String },
    /// No input backs the feature; it is filled with 0.
    Unresolved,
}

impl FeatureSource {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Unresolved)
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Numerical { column } => format!("numeric from '{column}'"),
            Self::Indicator { column, level } => format!("indicator '{column}' = '{level}'"),
            Self::Passthrough { column } => format!("copied from '{column}'"),
            Self::Unresolved => "filled with 0".to_string(),
        }
    }
}

/// Result of negotiating an upload's columns against a feature schema.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnNegotiation {
    /// Presence of every catalogued column, keyed by column name.
    pub catalogued: BTreeMap<&'static str, (ColumnRole, Presence)>,
    /// Upload columns outside the catalogue, in upload order.
    pub passthrough: Vec<String>,
    /// Uncatalogued upload columns named like an indicator of a present
    /// categorical column; excluded from `passthrough`.
    pub shadowed: Vec<String>,
    /// Source of every schema feature, in schema order.
    pub features: Vec<(String, FeatureSource)>,
}

impl ColumnNegotiation {
    pub fn presence(&self, column: &str) -> Presence {
        self.catalogued
            .get(column)
            .map_or(Presence::Absent, |(_, presence)| *presence)
    }

    pub fn is_present(&self, column: &str) -> bool {
        self.presence(column).is_present()
    }

    /// Present catalogued columns with the given role, in catalogue order.
    pub fn present_with_role(&self, role: ColumnRole) -> Vec<&'static str> {
        catalogued_columns()
            .filter(|(name, column_role)| *column_role == role && self.is_present(name))
            .map(|(name, _)| name)
            .collect()
    }

    /// Number of schema features backed by an upload column.
    pub fn resolved_count(&self) -> usize {
        self.features
            .iter()
            .filter(|(_, source)| source.is_resolved())
            .count()
    }

    /// Schema features no upload column backs.
    pub fn unresolved(&self) -> impl Iterator<Item = &str> {
        self.features
            .iter()
            .filter(|(_, source)| !source.is_resolved())
            .map(|(name, _)| name.as_str())
    }
}

/// Negotiate upload columns against a feature schema.
pub fn negotiate<S: AsRef<str>>(columns: &[S], schema: &FeatureSchema) -> ColumnNegotiation {
    let present = |name: &str| columns.iter().any(|column| column.as_ref() == name);

    let catalogued: BTreeMap<&'static str, (ColumnRole, Presence)> = catalogued_columns()
        .map(|(name, role)| (name, (role, Presence::of(present(name)))))
        .collect();

    let (shadowed, passthrough): (Vec<String>, Vec<String>) = columns
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|column| ColumnRole::lookup(column).is_none())
        .map(ToString::to_string)
        .partition(|column| present_indicator(column, &catalogued).is_some());

    let features = schema
        .iter()
        .map(|feature| {
            let source = resolve_feature(feature, &catalogued, &passthrough);
            (feature.to_string(), source)
        })
        .collect();

    ColumnNegotiation {
        catalogued,
        passthrough,
        shadowed,
        features,
    }
}

/// Split `name` into a present categorical column and level.
fn present_indicator<'a>(
    name: &'a str,
    catalogued: &BTreeMap<&'static str, (ColumnRole, Presence)>,
) -> Option<(&'static str, &'a str)> {
    CATEGORICAL_COLUMNS.iter().find_map(|&column| {
        let level = name.strip_prefix(column)?.strip_prefix('_')?;
        catalogued
            .get(column)
            .is_some_and(|(_, presence)| presence.is_present())
            .then_some((column, level))
    })
}

fn resolve_feature(
    feature: &str,
    catalogued: &BTreeMap<&'static str, (ColumnRole, Presence)>,
    passthrough: &[String],
) -> FeatureSource {
    // 1. Indicator of a present categorical column
    if let Some((column, level)) = present_indicator(feature, catalogued) {
        return FeatureSource::Indicator {
            column: column.to_string(),
            level: level.to_string(),
        };
    }

    // 2. Uncatalogued upload column with the exact name
    if passthrough.iter().any(|column| column == feature) {
        return FeatureSource::Passthrough {
            column: feature.to_string(),
        };
    }

    // 3. Numerical column
    if let Some((ColumnRole::Numerical, Presence::Present)) = catalogued.get(feature) {
        return FeatureSource::Numerical {
            column: feature.to_string(),
        };
    }

    // 4. Dropped, target, absent, or unknown
    FeatureSource::Unresolved
}
