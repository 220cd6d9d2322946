//! CSV and JSON serialisation of result rows, and the download seam.
//!
//! Serialisation is pure and returns strings; writing them anywhere goes
//! through an injected [`FileSink`].

pub mod csv;
pub mod json;
pub mod sink;

pub use self::csv::{FORMATTED_COLUMNS, complete_csv, escape_field, format_number, formatted_csv};
pub use json::pretty_json;
pub use sink::{
    DEFAULT_EXPORT_NAME, DirectorySink, ExportError, ExportKind, ExportOutcome,
    ExportedFile, FileSink, MemorySink, export_rows,
};
