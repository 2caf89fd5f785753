//! Cell text and numeric parsing.
//!
//! Uploads are read with every column as text, and the prediction column is
//! text too, so result cells are almost always strings or null.

use polars::prelude::AnyValue;

/// Text of one cell as it appears in a results file or preview.
///
/// Null is the empty cell, the same way an empty field was read on upload.
/// String cells are returned verbatim.
pub fn cell_text(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(text) => text.to_owned(),
        AnyValue::StringOwned(text) => text.as_str().to_owned(),
        AnyValue::Float64(v) => v.to_string(),
        AnyValue::Float32(v) => v.to_string(),
        other => other.to_string(),
    }
}

/// Parses a trimmed cell as `f64`; blank or non-numeric text is `None`.
///
/// `inf`, `-inf` and `NaN` parse to their float values.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_cell_is_empty() {
        assert_eq!(cell_text(AnyValue::Null), "");
    }

    #[test]
    fn census_text_is_verbatim() {
        assert_eq!(cell_text(AnyValue::String(" Self-emp-not-inc")), " Self-emp-not-inc");
        assert_eq!(cell_text(AnyValue::String("?")), "?");
        assert_eq!(cell_text(AnyValue::String("<=50K")), "<=50K");
    }

    #[test]
    fn aligned_floats_have_no_fraction_when_integral() {
        assert_eq!(cell_text(AnyValue::Float64(39.0)), "39");
        assert_eq!(cell_text(AnyValue::Float64(0.0)), "0");
        assert_eq!(cell_text(AnyValue::Float64(2174.5)), "2174.5");
        assert_eq!(cell_text(AnyValue::Int32(40)), "40");
    }

    #[test]
    fn parses_census_numbers() {
        assert_eq!(parse_f64(" 77516 "), Some(77516.0));
        assert_eq!(parse_f64("1e3"), Some(1000.0));
        assert_eq!(parse_f64("-inf"), Some(f64::NEG_INFINITY));
        assert!(parse_f64("NaN").is_some_and(f64::is_nan));
    }

    #[test]
    fn rejects_blank_and_text() {
        assert_eq!(parse_f64(""), None);
        assert_eq!(parse_f64("\t"), None);
        assert_eq!(parse_f64("Bachelors"), None);
        assert_eq!(parse_f64("12 hours"), None);
    }
}
