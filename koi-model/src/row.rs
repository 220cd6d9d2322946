use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::columns::ROW_KEY_COLUMN;

/// One record of the archive response, keyed by catalog column name.
///
/// Rows are passed through unvalidated. Key order is the order in which the
/// archive sent the fields, and a missing key reads the same as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExoplanetRow(Map<String, Value>);

impl ExoplanetRow {
    /// Wraps an already decoded JSON object.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Converts a JSON value into a row; non-objects yield `None`.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self(fields)),
            _ => None,
        }
    }

    /// Builds a row from `(column, value)` pairs, keeping their order.
    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Self(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Value of `column`, with `null` and missing keys both mapped to `None`.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0.get(column).filter(|value| !value.is_null())
    }

    /// Numeric value of `column`.
    pub fn number(&self, column: &str) -> Option<f64> {
        self.get(column).and_then(Value::as_f64)
    }

    /// String value of `column`.
    pub fn text(&self, column: &str) -> Option<&str> {
        self.get(column).and_then(Value::as_str)
    }

    /// Column names in payload order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Fields in payload order, `null`s included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields on the row.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the row carries no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Display key: the KOI name when present, otherwise the row position.
    pub fn display_key(&self, index: usize) -> String {
        match self.get(ROW_KEY_COLUMN) {
            Some(Value::String(name)) if !name.is_empty() => name.clone(),
            _ => index.to_string(),
        }
    }

    /// Underlying JSON object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consumes the row into its JSON object.
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for ExoplanetRow {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Plain-text form of a field value; `None` for `null`.
///
/// Strings are returned verbatim, numbers in their shortest decimal form
/// (`1.0` prints as `1`), booleans as `true`/`false`, and nested arrays or
/// objects as compact JSON.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(if let Some(i) = n.as_i64() {
            i.to_string()
        } else if let Some(u) = n.as_u64() {
            u.to_string()
        } else {
            n.as_f64().map(|f| f.to_string()).unwrap_or_else(|| n.to_string())
        }),
        nested => Some(nested.to_string()),
    }
}
