use koi_model::{ExoplanetRow, value_text};
use serde_json::Value;

use crate::format::{fixed, plain, rounded};

/// Columns of the formatted export as `(catalog column, header label)`.
pub const FORMATTED_COLUMNS: [(&str, &str); 29] = [
    ("kepoi_name", "KOI Name"),
    ("kepler_name", "Kepler Name"),
    ("kepid", "KepID"),
    ("koi_disposition", "Disposition"),
    ("koi_score", "Score"),
    ("koi_period", "Period (days)"),
    ("koi_period_err1", "Period Error +"),
    ("koi_period_err2", "Period Error -"),
    ("koi_prad", "Planet Radius (Earth radii)"),
    ("koi_prad_err1", "Planet Radius Error +"),
    ("koi_prad_err2", "Planet Radius Error -"),
    ("koi_teq", "Equilibrium Temperature (K)"),
    ("koi_insol", "Insolation (Earth flux)"),
    ("koi_sma", "Semi-major Axis (AU)"),
    ("koi_eccen", "Eccentricity"),
    ("koi_incl", "Inclination (deg)"),
    ("koi_depth", "Transit Depth (ppm)"),
    ("koi_duration", "Transit Duration (hrs)"),
    ("koi_steff", "Stellar Effective Temperature (K)"),
    ("koi_slogg", "Stellar Surface Gravity (log10(cm/s^2))"),
    ("koi_smet", "Stellar Metallicity (dex)"),
    ("koi_srad", "Stellar Radius (Solar radii)"),
    ("koi_smass", "Stellar Mass (Solar masses)"),
    ("koi_kepmag", "Kepler Magnitude"),
    ("ra_str", "Right Ascension"),
    ("dec_str", "Declination"),
    ("koi_num_transits", "Number of Transits"),
    ("koi_quarters", "Quarters"),
    ("koi_comment", "Comments"),
];

/// Quotes `text` when it holds a comma, a double quote or a newline,
/// doubling inner quotes.
pub fn escape_field(text: &str) -> String {
    if text.contains([',', '"', '\n']) {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}

/// Complete export: every key of the first row, in that row's order.
///
/// Returns an empty string for an empty row set.
pub fn complete_csv(rows: &[ExoplanetRow]) -> String {
    let Some(first) = rows.first() else {
        return String::new();
    };
    let headers: Vec<&str> = first.columns().collect();

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(
        headers
            .iter()
            .map(|header| escape_field(header))
            .collect::<Vec<_>>()
            .join(","),
    );
    for row in rows {
        lines.push(
            headers
                .iter()
                .map(|header| field(row.get(header), plain))
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    lines.join("\n")
}

/// Formatted export: the curated labelled columns with per-column precision.
///
/// Returns an empty string for an empty row set.
pub fn formatted_csv(rows: &[ExoplanetRow]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(
        FORMATTED_COLUMNS
            .iter()
            .map(|(_, label)| escape_field(label))
            .collect::<Vec<_>>()
            .join(","),
    );
    for row in rows {
        lines.push(
            FORMATTED_COLUMNS
                .iter()
                .map(|(key, _)| field(row.get(key), |n| format_number(key, n)))
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    lines.join("\n")
}

/// Formats a number for the formatted export. The first matching rule on
/// the column name wins:
///
/// | column name contains        | output             |
/// |-----------------------------|--------------------|
/// | `period` (but not `err`)    | 6 decimals         |
/// | `prad`, `srad` or `smass`   | 3 decimals         |
/// | `teq` or `steff`            | rounded integer    |
/// | `mag`                       | 3 decimals         |
/// | `err`                       | 6 decimals         |
/// | anything else               | shortest form      |
pub fn format_number(column: &str, value: f64) -> String {
    let has = |part: &str| column.contains(part);
    if has("period") && !has("err") {
        fixed(value, 6)
    } else if has("prad") || has("srad") || has("smass") {
        fixed(value, 3)
    } else if has("teq") || has("steff") {
        rounded(value)
    } else if has("mag") {
        fixed(value, 3)
    } else if has("err") {
        fixed(value, 6)
    } else {
        plain(value)
    }
}

fn field(value: Option<&Value>, number: impl Fn(f64) -> String) -> String {
    match value {
        None => String::new(),
        Some(Value::Number(n)) => n.as_f64().map(number).unwrap_or_else(|| n.to_string()),
        Some(other) => escape_field(&value_text(other).unwrap_or_default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn escapes_only_when_needed() {
        assert_eq!(escape_field("Kepler-22 b"), "Kepler-22 b");
        assert_eq!(escape_field("a,b"), "\"a,b\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_field("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn complete_csv_follows_first_row_keys() {
        let rows = vec![
            ExoplanetRow::from_pairs([
                ("kepoi_name", json!("K00001.01")),
                ("koi_prad", json!(13.04)),
                ("koi_comment", Value::Null),
            ]),
            ExoplanetRow::from_pairs([
                ("koi_prad", json!(1.0)),
                ("kepoi_name", json!("K00002.01")),
                ("extra", json!("ignored")),
            ]),
        ];
        assert_eq!(
            complete_csv(&rows),
            "kepoi_name,koi_prad,koi_comment\nK00001.01,13.04,\nK00002.01,1,"
        );
    }

    #[test]
    fn empty_rows_export_nothing() {
        assert_eq!(complete_csv(&[]), "");
        assert_eq!(formatted_csv(&[]), "");
    }

    #[test]
    fn format_rules_apply_in_order() {
        assert_eq!(format_number("koi_period", 9.48803557), "9.488036");
        assert_eq!(format_number("koi_period_err1", 2.775e-05), "0.000028");
        assert_eq!(format_number("koi_prad_err1", 0.26), "0.260");
        assert_eq!(format_number("koi_srad", 0.927), "0.927");
        assert_eq!(format_number("koi_teq", 792.6), "793");
        assert_eq!(format_number("koi_steff", 5455.5), "5456");
        assert_eq!(format_number("koi_kepmag", 15.347), "15.347");
        assert_eq!(format_number("koi_depth", 615.8), "615.8");
        assert_eq!(format_number("kepid", 10797460.0), "10797460");
    }

    #[test]
    fn formatted_csv_has_labelled_header() {
        let rows = vec![ExoplanetRow::from_pairs([
            ("kepoi_name", json!("K00752.01")),
            ("koi_comment", json!("centroid offset, see DV")),
            ("koi_teq", json!(793.0)),
        ])];
        let csv = formatted_csv(&rows);
        let mut lines = csv.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("KOI Name,Kepler Name,KepID,Disposition,Score,"));
        assert!(header.ends_with(",Quarters,Comments"));
        assert_eq!(header.split(',').count(), 29);

        let row = lines.next().unwrap();
        assert!(row.starts_with("K00752.01,,,"));
        assert!(row.ends_with(",\"centroid offset, see DV\""));
        assert!(row.contains(",793,"));
        assert!(lines.next().is_none());
    }
}
