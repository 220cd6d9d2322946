//! Health and schema exploration endpoints.
//!
//! These go through the same upstream client as the proxy and always answer
//! 200; failures are reported in the body as `success: false`.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};
use tracing::info;

use crate::{
    infra::app_state::AppState,
    upstream::{UpstreamError, truncate_chars},
};

pub const TABLES_QUERY: &str = "SELECT table_name FROM TAP_SCHEMA.tables";
pub const PROBE_QUERY: &str = "SELECT kepoi_name FROM cumulative WHERE ROWNUM <= 1";
pub const SAMPLE_QUERY: &str = "SELECT * FROM cumulative WHERE ROWNUM <= 1";

const RAW_LIMIT: usize = 1_000;
const PROBE_RAW_LIMIT: usize = 2_000;

/// Column lookup for one table. The name is embedded verbatim.
pub fn schema_query(table_name: &str) -> String {
    format!("SELECT column_name FROM TAP_SCHEMA.columns WHERE table_name = '{table_name}'")
}

pub async fn ping_handler() -> Json<Value> {
    info!("Ping endpoint called");
    Json(json!({
        "status": "ok",
        "message": "KOI proxy is running",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "OK", "message": "Proxy server is running" }))
}

pub async fn tables_handler(State(state): State<AppState>) -> Json<Value> {
    let body = match state.tap.fetch_text(TABLES_QUERY, "json").await {
        Ok(body) => body,
        Err(err) => return Json(upstream_failure(&err, TABLES_QUERY)),
    };

    match string_column(&body, "table_name") {
        Some(tables) => Json(json!({
            "success": true,
            "query": TABLES_QUERY,
            "tableCount": tables.len(),
            "tables": tables,
        })),
        None => Json(parse_failure("Failed to parse tables response", &body)),
    }
}

pub async fn schema_handler(
    State(state): State<AppState>,
    Path(table_name): Path<String>,
) -> Json<Value> {
    let query = schema_query(&table_name);
    let body = match state.tap.fetch_text(&query, "json").await {
        Ok(body) => body,
        Err(err) => return Json(upstream_failure(&err, &query)),
    };

    match string_column(&body, "column_name") {
        Some(columns) => Json(json!({
            "success": true,
            "tableName": table_name,
            "query": query,
            "columnCount": columns.len(),
            "columns": columns,
        })),
        None => Json(parse_failure("Failed to parse schema response", &body)),
    }
}

/// Probes the catalog with a one-row query, then lists every column of a
/// one-row `SELECT *`.
pub async fn test_handler(State(state): State<AppState>) -> Json<Value> {
    let probe = match state.tap.fetch_text(PROBE_QUERY, "json").await {
        Ok(body) => body,
        Err(err) => return Json(upstream_failure(&err, PROBE_QUERY)),
    };

    let parsed: Value = match serde_json::from_str(&probe) {
        Ok(parsed) => parsed,
        Err(err) => {
            return Json(json!({
                "success": false,
                "query": PROBE_QUERY,
                "parseError": err.to_string(),
                "rawResponse": truncate_chars(&probe, PROBE_RAW_LIMIT),
            }));
        }
    };

    if !parsed.is_array() {
        return Json(json!({ "success": true, "query": PROBE_QUERY, "result": parsed }));
    }

    let sample = match state.tap.fetch_json(SAMPLE_QUERY, "json").await {
        Ok(sample) => sample,
        Err(err) => return Json(upstream_failure(&err, PROBE_QUERY)),
    };
    let first = sample.as_array().and_then(|rows| rows.first()).cloned();
    let mut columns: Vec<String> = first
        .as_ref()
        .and_then(Value::as_object)
        .map(|row| row.keys().cloned().collect())
        .unwrap_or_default();
    columns.sort();

    Json(json!({
        "success": true,
        "query": SAMPLE_QUERY,
        "columnCount": columns.len(),
        "columns": columns,
        "sampleData": first,
    }))
}

/// Sorted string values of `column` across a JSON array of rows.
fn string_column(body: &str, column: &str) -> Option<Vec<String>> {
    let rows: Vec<Value> = serde_json::from_str(body).ok()?;
    let mut values: Vec<String> = rows
        .iter()
        .filter_map(|row| row.get(column).and_then(Value::as_str))
        .map(str::to_string)
        .collect();
    values.sort();
    Some(values)
}

fn upstream_failure(err: &UpstreamError, query: &str) -> Value {
    json!({ "success": false, "error": err.to_string(), "query": query })
}

fn parse_failure(message: &str, body: &str) -> Value {
    json!({
        "success": false,
        "error": message,
        "rawResponse": truncate_chars(body, RAW_LIMIT),
    })
}
