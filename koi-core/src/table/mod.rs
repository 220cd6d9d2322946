//! Client-side search, sort and pagination over fetched rows.

pub mod display;
pub mod search;
pub mod sorting;
pub mod types;
pub mod view;

pub use display::{
    Badge, CellView, DisplayColumn, RESULT_DISPLAY_COLUMNS, overview_url,
    render_cell,
};
pub use search::row_matches;
pub use sorting::{compare_rows, sort_rows};
pub use types::{ColumnSort, DEFAULT_PAGE_SIZE, MAX_VISIBLE_PAGES, SortOrder};
pub use view::{TableSummary, TableView};
