//! Handing serialised exports to a file sink.

use std::{
    fmt,
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

use koi_model::ExoplanetRow;
use thiserror::Error;
use tracing::{info, warn};

use super::{complete_csv, formatted_csv, pretty_json};

/// Base name used for exported files.
pub const DEFAULT_EXPORT_NAME: &str = "koi_data";

const JSON_MIME: &str = "application/json";
const CSV_MIME: &str = "text/csv;charset=utf-8;";

/// Why an export produced no file.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Rows could not be rendered as JSON.
    #[error("failed to serialize rows: {0}")]
    Serialize(#[from] serde_json::Error),

    /// File name would escape the target directory.
    #[error("invalid export file name: {0:?}")]
    InvalidFileName(String),

    /// Writing the file failed.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        /// File that could not be written.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// The three downloads offered for a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportKind {
    /// Pretty-printed JSON array of the rows.
    Json,
    /// Every column, raw values.
    CompleteCsv,
    /// Curated columns with fixed precision.
    FormattedCsv,
}

impl ExportKind {
    /// Every kind, in button order.
    pub const ALL: [ExportKind; 3] =
        [ExportKind::Json, ExportKind::CompleteCsv, ExportKind::FormattedCsv];

    /// File name for a download with base name `base`.
    pub fn file_name(self, base: &str) -> String {
        match self {
            ExportKind::Json => format!("{base}.json"),
            ExportKind::CompleteCsv => format!("{base}_complete.csv"),
            ExportKind::FormattedCsv => format!("{base}_formatted.csv"),
        }
    }

    /// MIME type handed to the file sink.
    pub fn mime_type(self) -> &'static str {
        match self {
            ExportKind::Json => JSON_MIME,
            ExportKind::CompleteCsv | ExportKind::FormattedCsv => CSV_MIME,
        }
    }

    /// Button caption.
    pub fn label(self) -> &'static str {
        match self {
            ExportKind::Json => "Export JSON",
            ExportKind::CompleteCsv => "Export Complete CSV",
            ExportKind::FormattedCsv => "Export Formatted CSV",
        }
    }

    /// Serialises `rows` in this format.
    pub fn render(self, rows: &[ExoplanetRow]) -> Result<String, ExportError> {
        Ok(match self {
            ExportKind::Json => pretty_json(rows)?,
            ExportKind::CompleteCsv => complete_csv(rows),
            ExportKind::FormattedCsv => formatted_csv(rows),
        })
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExportKind::Json => "json",
            ExportKind::CompleteCsv => "complete-csv",
            ExportKind::FormattedCsv => "formatted-csv",
        })
    }
}

/// Platform capability that hands a finished file to the user.
pub trait FileSink: Send + Sync {
    fn export_to_file(
        &self,
        bytes: &[u8],
        filename: &str,
        mime_type: &str,
    ) -> Result<(), ExportError>;
}

/// Writes exports as files inside one directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    /// Sink writing into `root`, which must already exist.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory files are written to.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Target path for `filename`. Names that would leave the directory are
    /// rejected.
    pub fn path_for(&self, filename: &str) -> Result<PathBuf, ExportError> {
        let invalid = filename.is_empty()
            || filename == "."
            || filename == ".."
            || filename.contains(['/', '\\']);
        if invalid {
            return Err(ExportError::InvalidFileName(filename.to_string()));
        }
        Ok(self.root.join(filename))
    }
}

impl FileSink for DirectorySink {
    fn export_to_file(
        &self,
        bytes: &[u8],
        filename: &str,
        mime_type: &str,
    ) -> Result<(), ExportError> {
        let path = self.path_for(filename)?;
        std::fs::write(&path, bytes).map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), mime_type, bytes = bytes.len(), "export written");
        Ok(())
    }
}

/// A file captured by [`MemorySink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub filename: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ExportedFile {
    /// Contents as UTF-8 text (lossy).
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

/// Keeps exports in memory. Useful for embedding and tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    files: Mutex<Vec<ExportedFile>>,
}

impl MemorySink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Files captured so far, oldest first.
    pub fn files(&self) -> Vec<ExportedFile> {
        self.files
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl FileSink for MemorySink {
    fn export_to_file(
        &self,
        bytes: &[u8],
        filename: &str,
        mime_type: &str,
    ) -> Result<(), ExportError> {
        self.files
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(ExportedFile {
                filename: filename.to_string(),
                mime_type: mime_type.to_string(),
                bytes: bytes.to_vec(),
            });
        Ok(())
    }
}

/// What [`export_rows`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Written { filename: String, bytes: usize },
    /// Nothing to export; no file was produced.
    Skipped,
}

/// Serialises `rows` as `kind` and hands the result to `sink`.
///
/// An empty row set is not an error: a warning is logged and the sink is
/// never called.
pub fn export_rows(
    sink: &dyn FileSink,
    rows: &[ExoplanetRow],
    kind: ExportKind,
    base_name: &str,
) -> Result<ExportOutcome, ExportError> {
    if rows.is_empty() {
        warn!(%kind, "no data to export");
        return Ok(ExportOutcome::Skipped);
    }

    let content = kind.render(rows)?;
    let filename = kind.file_name(base_name);
    sink.export_to_file(content.as_bytes(), &filename, kind.mime_type())?;

    Ok(ExportOutcome::Written {
        filename,
        bytes: content.len(),
    })
}
