//! Sort descriptors and paging constants.

use serde::{Deserialize, Serialize};

/// Rows per page in the primary results view.
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Page buttons shown at once.
pub const MAX_VISIBLE_PAGES: usize = 5;

/// Sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

/// Active single-column sort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSort {
    /// Catalog column name.
    pub column: String,
    /// Direction applied to non-null values.
    pub order: SortOrder,
}

impl ColumnSort {
    /// Ascending sort on `column`.
    pub fn ascending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            order: SortOrder::Ascending,
        }
    }

    /// Descending sort on `column`.
    pub fn descending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            order: SortOrder::Descending,
        }
    }

    /// Next step of the header-click cycle for `column`:
    /// unsorted, ascending, descending, unsorted.
    ///
    /// Clicking a different column always starts at ascending.
    pub fn cycle(current: Option<&ColumnSort>, column: &str) -> Option<ColumnSort> {
        match current {
            Some(sort) if sort.column == column => match sort.order {
                SortOrder::Ascending => Some(ColumnSort::descending(column)),
                SortOrder::Descending => None,
            },
            _ => Some(ColumnSort::ascending(column)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_clicks_cycle_through_three_states() {
        let first = ColumnSort::cycle(None, "koi_prad");
        assert_eq!(first, Some(ColumnSort::ascending("koi_prad")));
        let second = ColumnSort::cycle(first.as_ref(), "koi_prad");
        assert_eq!(second, Some(ColumnSort::descending("koi_prad")));
        let third = ColumnSort::cycle(second.as_ref(), "koi_prad");
        assert_eq!(third, None);
    }

    #[test]
    fn switching_columns_restarts_ascending() {
        let current = ColumnSort::descending("koi_prad");
        assert_eq!(
            ColumnSort::cycle(Some(&current), "koi_teq"),
            Some(ColumnSort::ascending("koi_teq"))
        );
    }
}
