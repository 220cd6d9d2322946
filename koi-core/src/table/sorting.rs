//! Column ordering with empty values last.

use koi_model::{ExoplanetRow, value_text};
use serde_json::Value;
use std::cmp::Ordering;

use super::types::{ColumnSort, SortOrder};

/// Compare two rows on `sort.column`.
///
/// Rows without a value (null or missing key) always go last, whatever the
/// order; the order only reverses how non-null values compare to each other.
pub fn compare_rows(a: &ExoplanetRow, b: &ExoplanetRow, sort: &ColumnSort) -> Ordering {
    match (a.get(&sort.column), b.get(&sort.column)) {
        (Some(a), Some(b)) => {
            let ord = compare_values(a, b);
            if sort.order == SortOrder::Descending {
                ord.reverse()
            } else {
                ord
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sort rows in-place. The sort is stable, so ties keep their fetched order.
pub fn sort_rows(rows: &mut [&ExoplanetRow], sort: &ColumnSort) {
    rows.sort_by(|a, b| compare_rows(a, b, sort));
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
    if let (Value::Number(a), Value::Number(b)) = (a, b) {
        return compare_optional_partial(a.as_f64(), b.as_f64());
    }
    let a = value_text(a).unwrap_or_default().to_lowercase();
    let b = value_text(b).unwrap_or_default().to_lowercase();
    a.cmp(&b)
}

fn compare_optional_partial<T: PartialOrd>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
