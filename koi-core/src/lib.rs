//! Core library for the KOI catalog explorer.
//!
//! The pipeline runs in one direction: a [`FilterState`](koi_model::FilterState)
//! becomes an ADQL string ([`query`]), the string is sent to the archive
//! proxy ([`fetch`]), and the rows that come back are searched, sorted and
//! paginated ([`table`]) or serialised for download ([`export`]). The
//! [`shell`] module ties these together as an explicit state machine.

pub mod export;
pub mod fetch;
pub mod format;
pub mod query;
pub mod shell;
pub mod table;

pub use export::{ExportError, ExportKind, FileSink};
pub use fetch::{CatalogClient, CatalogSource, FetchError};
pub use query::{CatalogQueryBuilder, build_query};
pub use shell::{AppState, Effect, Message, Session, update};
pub use table::{ColumnSort, SortOrder, TableView};
