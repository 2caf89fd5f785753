//! Numeric coercion for numerical census columns.
//!
//! Unparseable cells become 0 so alignment stays total.

use income_common::parse_f64;

/// Parse a cell as a number.
///
/// Surrounding whitespace is ignored. Returns `None` for empty or
/// non-numeric text.
pub fn parse_numeric(value: &str) -> Option<f64> {
    parse_f64(value)
}

/// Coerce a possibly missing cell to a number, using 0 for anything that is
/// missing, unparseable, or NaN.
///
/// ```
/// use income_transform::normalization::coerce_numeric;
///
/// assert_eq!(coerce_numeric(Some("39")), 39.0);
/// assert_eq!(coerce_numeric(Some("forty")), 0.0);
/// assert_eq!(coerce_numeric(None), 0.0);
/// ```
pub fn coerce_numeric(value: Option<&str>) -> f64 {
    value.and_then(parse_numeric).map_or(0.0, zero_nan)
}

/// Replace NaN with 0.
pub(crate) fn zero_nan(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value }
}
