//! Curated columns of the results table and how each cell is rendered.

use koi_model::{ExoplanetRow, value_text};
use serde_json::Value;

use crate::format::{fixed, rounded};

/// Base URL of the archive's per-object overview pages.
pub const OVERVIEW_BASE_URL: &str = "https://exoplanetarchive.ipac.caltech.edu/overview/";

/// Placeholder for absent values.
pub const MISSING: &str = "N/A";

/// Colour class of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    /// Confirmed planet or high score.
    Success,
    /// Candidate or middling score.
    Warning,
    /// Anything else.
    Danger,
}

/// Rendered content of one cell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CellView {
    /// Main text.
    pub text: String,
    /// Secondary line such as an uncertainty.
    pub detail: Option<String>,
    /// Badge styling, when the cell is shown as a badge.
    pub badge: Option<Badge>,
    /// External link attached to the cell.
    pub link: Option<String>,
}

impl CellView {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    fn missing() -> Self {
        Self::text(MISSING)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellFormat {
    Text,
    KeplerName,
    Disposition,
    Score,
    Period,
    Radius,
    Rounded,
    Fixed(usize),
    Count,
}

/// A column of the results table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayColumn {
    /// Catalog column rendered (and sorted on).
    pub key: &'static str,
    /// Header label.
    pub label: &'static str,
    /// Suggested width.
    pub width: &'static str,
    format: CellFormat,
}

const fn column(
    key: &'static str,
    label: &'static str,
    width: &'static str,
    format: CellFormat,
) -> DisplayColumn {
    DisplayColumn {
        key,
        label,
        width,
        format,
    }
}

/// Columns of the primary results view, in display order.
pub const RESULT_DISPLAY_COLUMNS: [DisplayColumn; 14] = [
    column("kepoi_name", "KOI Name", "120px", CellFormat::Text),
    column("kepler_name", "Kepler Name", "160px", CellFormat::KeplerName),
    column("koi_disposition", "Disposition", "120px", CellFormat::Disposition),
    column("koi_score", "Score", "80px", CellFormat::Score),
    column("koi_period", "Period (days)", "100px", CellFormat::Period),
    column("koi_prad", "Radius (R⊕)", "100px", CellFormat::Radius),
    column("koi_teq", "Temp (K)", "80px", CellFormat::Rounded),
    column("koi_insol", "Insolation", "90px", CellFormat::Fixed(1)),
    column("koi_smass", "M★ (M☉)", "80px", CellFormat::Fixed(2)),
    column("koi_steff", "T★ (K)", "80px", CellFormat::Rounded),
    column("koi_num_transits", "Transits", "80px", CellFormat::Count),
    column("ra_str", "RA", "100px", CellFormat::Text),
    column("dec_str", "Dec", "100px", CellFormat::Text),
    column("koi_kepmag", "Kep Mag", "80px", CellFormat::Fixed(2)),
];

/// Archive overview page for a named object.
pub fn overview_url(name: &str) -> String {
    format!("{OVERVIEW_BASE_URL}{}", urlencoding::encode(name))
}

/// Renders the cell of `column` for `row`.
pub fn render_cell(column: &DisplayColumn, row: &ExoplanetRow) -> CellView {
    let value = row.get(column.key);
    match column.format {
        CellFormat::Text => value
            .and_then(value_text)
            .filter(|text| !text.is_empty())
            .map(CellView::text)
            .unwrap_or_else(CellView::missing),
        CellFormat::KeplerName => match row.text(column.key).filter(|n| !n.is_empty()) {
            Some(name) => CellView {
                link: Some(overview_url(name)),
                ..CellView::text(name)
            },
            None => CellView::missing(),
        },
        CellFormat::Disposition => match value.and_then(value_text) {
            Some(disposition) => CellView {
                badge: Some(match disposition.as_str() {
                    "CONFIRMED" => Badge::Success,
                    "CANDIDATE" => Badge::Warning,
                    _ => Badge::Danger,
                }),
                ..CellView::text(disposition)
            },
            None => CellView::missing(),
        },
        CellFormat::Score => match value.and_then(Value::as_f64) {
            Some(score) => CellView {
                badge: Some(score_badge(score)),
                ..CellView::text(fixed(score, 2))
            },
            None => CellView::missing(),
        },
        CellFormat::Period => CellView {
            detail: non_zero(row, "koi_period_err1").map(|err| format!("±{}", fixed(err, 5))),
            ..number_or_missing(value, |v| fixed(v, 3))
        },
        CellFormat::Radius => CellView {
            detail: non_zero(row, "koi_prad_err1").map(|upper| {
                let lower = row
                    .number("koi_prad_err2")
                    .map(|v| fixed(v, 2))
                    .unwrap_or_else(|| MISSING.to_string());
                format!("+{}/{lower}", fixed(upper, 2))
            }),
            ..number_or_missing(value, |v| fixed(v, 2))
        },
        CellFormat::Rounded => number_or_missing(value, rounded),
        CellFormat::Fixed(decimals) => number_or_missing(value, |v| fixed(v, decimals)),
        CellFormat::Count => value
            .and_then(Value::as_f64)
            .filter(|count| *count != 0.0)
            .and_then(|_| value.and_then(value_text))
            .map(CellView::text)
            .unwrap_or_else(CellView::missing),
    }
}

/// Badge for a disposition score: 0.8 and up, 0.5 and up, below.
pub fn score_badge(score: f64) -> Badge {
    if score >= 0.8 {
        Badge::Success
    } else if score >= 0.5 {
        Badge::Warning
    } else {
        Badge::Danger
    }
}

fn number_or_missing(value: Option<&Value>, render: impl Fn(f64) -> String) -> CellView {
    value
        .and_then(Value::as_f64)
        .map(|v| CellView::text(render(v)))
        .unwrap_or_else(CellView::missing)
}

fn non_zero(row: &ExoplanetRow, column: &str) -> Option<f64> {
    row.number(column).filter(|v| *v != 0.0)
}
