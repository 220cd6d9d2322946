//! Free-text row search.

use koi_model::{ExoplanetRow, value_text};

/// True when any non-null field of `row` contains `needle`.
///
/// `needle` must already be lowercase; field text is lowercased before the
/// comparison.
pub fn row_matches(row: &ExoplanetRow, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    row.iter()
        .filter_map(|(_, value)| value_text(value))
        .any(|text| text.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn row() -> ExoplanetRow {
        ExoplanetRow::from_pairs([
            ("kepoi_name", json!("K00752.01")),
            ("kepler_name", json!("Kepler-227 b")),
            ("koi_period", json!(9.48803557)),
            ("koi_comment", Value::Null),
        ])
    }

    #[test]
    fn matches_text_case_insensitively() {
        assert!(row_matches(&row(), "kepler-227"));
        assert!(row_matches(&row(), "k00752"));
    }

    #[test]
    fn matches_number_text() {
        assert!(row_matches(&row(), "9.488"));
    }

    #[test]
    fn null_fields_never_match() {
        assert!(!row_matches(&row(), "null"));
    }

    #[test]
    fn empty_needle_matches_everything() {
        assert!(row_matches(&ExoplanetRow::default(), ""));
    }
}
