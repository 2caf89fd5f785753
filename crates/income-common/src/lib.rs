//! Shared utilities for the income prediction crates.
//!
//! Small helpers used by ingestion, transformation, and export to move
//! between polars cell values and their text or numeric form.

mod values;

pub use values::{cell_text, parse_f64};
