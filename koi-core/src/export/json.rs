//! JSON export.

use koi_model::ExoplanetRow;

/// The full row set as a JSON array indented with two spaces.
pub fn pretty_json(rows: &[ExoplanetRow]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn keeps_field_order_and_nulls() {
        let rows = vec![ExoplanetRow::from_pairs([
            ("kepoi_name", json!("K00001.01")),
            ("koi_score", Value::Null),
            ("koi_prad", json!(13.04)),
        ])];
        let text = pretty_json(&rows).unwrap();
        assert_eq!(
            text,
            "[\n  {\n    \"kepoi_name\": \"K00001.01\",\n    \"koi_score\": null,\n    \"koi_prad\": 13.04\n  }\n]"
        );
    }

    #[test]
    fn empty_set_is_an_empty_array() {
        assert_eq!(pretty_json(&[]).unwrap(), "[]");
    }
}
