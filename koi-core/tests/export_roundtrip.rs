use koi_core::export::{FORMATTED_COLUMNS, complete_csv, formatted_csv};
use koi_model::{ExoplanetRow, value_text};
use serde_json::{Value, json};

fn tricky_rows() -> Vec<ExoplanetRow> {
    vec![
        ExoplanetRow::from_pairs([
            ("kepoi_name", json!("K00001.01")),
            ("kepler_name", json!("Kepler-1 b")),
            ("koi_comment", json!("DEEP_V_SHAPED, centroid \"offset\"")),
            ("koi_prad", json!(13.04)),
            ("koi_num_transits", json!(237)),
        ]),
        ExoplanetRow::from_pairs([
            ("kepoi_name", json!("K00002.01")),
            ("kepler_name", Value::Null),
            ("koi_comment", json!("line one\nline two")),
            ("koi_prad", json!(16.1)),
            ("koi_num_transits", json!(0)),
        ]),
        ExoplanetRow::from_pairs([
            ("kepoi_name", json!("K00003.01")),
            ("koi_comment", json!("")),
            ("koi_prad", json!(4.0)),
        ]),
    ]
}

fn reader(text: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes())
}

#[test]
fn complete_csv_round_trips_through_a_csv_reader() {
    let rows = tricky_rows();
    let text = complete_csv(&rows);
    let mut reader = reader(&text);

    let headers: Vec<String> = reader
        .headers()
        .unwrap()
        .iter()
        .map(str::to_string)
        .collect();
    assert_eq!(
        headers,
        ["kepoi_name", "kepler_name", "koi_comment", "koi_prad", "koi_num_transits"]
    );

    let records: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(records.len(), rows.len());

    for (row, record) in rows.iter().zip(&records) {
        for (header, field) in headers.iter().zip(record.iter()) {
            let expected = row.get(header).and_then(value_text).unwrap_or_default();
            assert_eq!(field, expected, "column {header}");
        }
    }
}

#[test]
fn formatted_csv_parses_with_curated_header() {
    let rows = tricky_rows();
    let text = formatted_csv(&rows);
    let mut reader = reader(&text);

    let labels: Vec<String> = reader
        .headers()
        .unwrap()
        .iter()
        .map(str::to_string)
        .collect();
    let expected: Vec<&str> = FORMATTED_COLUMNS.iter().map(|(_, label)| *label).collect();
    assert_eq!(labels, expected);

    let records: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(records.len(), 3);

    let column = |label: &str| labels.iter().position(|l| l == label).unwrap();
    assert_eq!(&records[0][column("Comments")], "DEEP_V_SHAPED, centroid \"offset\"");
    assert_eq!(&records[0][column("Planet Radius (Earth radii)")], "13.040");
    assert_eq!(&records[1][column("Comments")], "line one\nline two");
    assert_eq!(&records[1][column("Number of Transits")], "0");
    assert_eq!(&records[2][column("Kepler Name")], "");
    assert_eq!(&records[2][column("Planet Radius (Earth radii)")], "4.000");
}
