//! Sentinel replacement for placeholder columns.

use income_model::{OTHERS_VALUE, SENTINEL_VALUE};

/// Replace the literal sentinel `?` with `Others`. Missing cells stay missing
/// and any other text is returned unchanged.
///
/// ```
/// use income_transform::normalization::replace_sentinel;
///
/// assert_eq!(replace_sentinel(Some("?")), Some("Others"));
/// assert_eq!(replace_sentinel(Some("Private")), Some("Private"));
/// assert_eq!(replace_sentinel(None), None);
/// ```
pub fn replace_sentinel(value: Option<&str>) -> Option<&str> {
    match value {
        Some(SENTINEL_VALUE) => Some(OTHERS_VALUE),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_exact_sentinel_is_replaced() {
        assert_eq!(replace_sentinel(Some(" ?")), Some(" ?"));
        assert_eq!(replace_sentinel(Some("??")), Some("??"));
        assert_eq!(replace_sentinel(Some("")), Some(""));
    }
}
