//! Census preprocessing and schema alignment.
//!
//! Converts an arbitrary uploaded census table into a table whose columns are
//! exactly a trained classifier's feature schema, applying the same
//! normalization rules used at training time.
//!
//! # Overview
//!
//! - **Negotiation**: resolve once which catalogued columns the upload carries
//!   and what input backs each schema feature
//! - **Normalization**: sentinel replacement and numeric coercion
//! - **Encoding**: one-hot expansion with the first level dropped
//! - **Alignment**: reindex to the schema, filling unbacked features with 0
//!
//! # Example
//!
//! ```ignore
//! use income_transform::{AlignOptions, align};
//!
//! let aligned = align(&upload.frame, &schema, &AlignOptions::default())?;
//! assert_eq!(aligned.width(), schema.len());
//! ```
//!
//! Alignment is total: missing or extra columns, unseen categories, and
//! malformed numbers all resolve to 0 or to the sentinel replacement.

mod align;
mod encoding;
mod error;
mod negotiation;
mod types;

pub mod normalization;

// Core types
pub use types::{AlignOptions, CategoryOrder};

// Error type
pub use error::{Result, TransformError};

// Negotiation
pub use negotiation::{ColumnNegotiation, FeatureSource, Presence, negotiate};

// Encoding
pub use encoding::{indicator_name, ordered_levels};

// Execution
pub use align::{PreprocessedFrame, align, align_negotiated, preprocess};
