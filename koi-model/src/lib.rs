//! Shared data models for the KOI catalog explorer.
//!
//! Everything here is plain data: the filter state a user edits, the enums
//! behind each filter, the fixed column catalog of the `cumulative` table and
//! the loosely typed row returned by the archive. Query construction,
//! presentation and transport live in `koi-core` and `koi-server`.

pub mod columns;
pub mod error;
pub mod filter_types;
pub mod filters;
pub mod row;
pub mod section;

pub use columns::{CATALOG_TABLE, RESULT_COLUMNS, ROW_KEY_COLUMN};
pub use error::ModelError;
pub use filter_types::{DetectionMethod, Disposition, PlanetType};
pub use filters::FilterState;
pub use row::{ExoplanetRow, value_text};
pub use section::Section;
