//! The searchable, sortable, paginated view over fetched rows.

use koi_model::ExoplanetRow;

use super::{
    search::row_matches,
    sorting::compare_rows,
    types::{ColumnSort, DEFAULT_PAGE_SIZE, MAX_VISIBLE_PAGES},
};

/// Search, sort and pagination state over a fixed row set.
///
/// The visible page is always re-derived in the same order: search first,
/// then sort, then pagination. Pages are 1-based and are never clamped; an
/// out-of-range page simply shows no rows.
#[derive(Debug, Clone)]
pub struct TableView {
    rows: Vec<ExoplanetRow>,
    search_term: String,
    sort: Option<ColumnSort>,
    current_page: usize,
    page_size: usize,
    /// Indices into `rows` after search and sort.
    derived: Vec<usize>,
}

/// Counts and messages describing what the table currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSummary {
    /// Rows left after the search.
    pub filtered: usize,
    /// Rows fetched.
    pub total: usize,
    /// 1-based position of the first visible row (0 when none).
    pub first_shown: usize,
    /// 1-based position of the last visible row (0 when none).
    pub last_shown: usize,
    /// Current page.
    pub current_page: usize,
    /// Number of pages.
    pub total_pages: usize,
}

impl TableSummary {
    /// "N results", with the unfiltered total when a search is narrowing it.
    pub fn count_label(&self, searching: bool) -> String {
        let plural = if self.filtered == 1 { "" } else { "s" };
        let mut label = format!("{} result{plural}", self.filtered);
        if searching {
            label.push_str(&format!(" (filtered from {})", self.total));
        }
        label
    }

    /// "Page X of Y".
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages)
    }

    /// "Showing X to Y of Z results".
    pub fn range_label(&self) -> String {
        format!(
            "Showing {} to {} of {} results",
            self.first_shown, self.last_shown, self.filtered
        )
    }
}

impl Default for TableView {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl TableView {
    /// View over `rows` with the default page size.
    pub fn new(rows: Vec<ExoplanetRow>) -> Self {
        Self::with_page_size(rows, DEFAULT_PAGE_SIZE)
    }

    /// View over `rows` with a custom page size (minimum 1).
    pub fn with_page_size(rows: Vec<ExoplanetRow>, page_size: usize) -> Self {
        let mut view = Self {
            rows,
            search_term: String::new(),
            sort: None,
            current_page: 1,
            page_size: page_size.max(1),
            derived: Vec::new(),
        };
        view.derive();
        view
    }

    /// All fetched rows in fetch order.
    pub fn rows(&self) -> &[ExoplanetRow] {
        &self.rows
    }

    /// Current search text.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Changes the search text and returns to page 1.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
        self.derive();
    }

    /// Active sort, if any.
    pub fn sort(&self) -> Option<&ColumnSort> {
        self.sort.as_ref()
    }

    /// Sets or clears the sort directly.
    pub fn set_sort(&mut self, sort: Option<ColumnSort>) {
        self.sort = sort;
        self.derive();
    }

    /// Advances the header-click cycle on `column`.
    pub fn toggle_sort(&mut self, column: &str) {
        let next = ColumnSort::cycle(self.sort.as_ref(), column);
        self.set_sort(next);
    }

    /// Current 1-based page.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Jumps to `page` without clamping.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page;
    }

    /// Moves one page back when a previous page exists.
    pub fn previous_page(&mut self) {
        if self.has_previous() {
            self.current_page -= 1;
        }
    }

    /// Moves one page forward when a next page exists.
    pub fn next_page(&mut self) {
        if self.has_next() {
            self.current_page += 1;
        }
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Rows left after the search.
    pub fn filtered_len(&self) -> usize {
        self.derived.len()
    }

    /// Rows fetched.
    pub fn total_len(&self) -> usize {
        self.rows.len()
    }

    /// `ceil(filtered / page_size)`.
    pub fn total_pages(&self) -> usize {
        self.derived.len().div_ceil(self.page_size)
    }

    /// Whether the "previous" control is enabled.
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Whether the "next" control is enabled.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Whether pagination controls are shown at all.
    pub fn shows_pagination(&self) -> bool {
        self.total_pages() > 1
    }

    /// Searched and sorted rows, across all pages.
    pub fn filtered_rows(&self) -> impl Iterator<Item = &ExoplanetRow> {
        self.derived.iter().map(|&index| &self.rows[index])
    }

    /// Rows on the current page.
    pub fn visible_rows(&self) -> Vec<&ExoplanetRow> {
        let range = self.page_range();
        self.derived[range]
            .iter()
            .map(|&index| &self.rows[index])
            .collect()
    }

    /// Rows on the current page paired with their display keys.
    pub fn visible_keyed_rows(&self) -> Vec<(String, &ExoplanetRow)> {
        let range = self.page_range();
        let offset = range.start;
        self.derived[range]
            .iter()
            .enumerate()
            .map(|(position, &index)| {
                let row = &self.rows[index];
                (row.display_key(offset + position), row)
            })
            .collect()
    }

    /// Page numbers to offer as buttons: at most five, centred on the
    /// current page and clamped to `1..=total_pages`.
    pub fn page_window(&self) -> Vec<usize> {
        let total = self.total_pages();
        let half = MAX_VISIBLE_PAGES / 2;
        let mut start = self.current_page.saturating_sub(half).max(1);
        let end = total.min(start.saturating_add(MAX_VISIBLE_PAGES - 1));
        if end.saturating_sub(start) < MAX_VISIBLE_PAGES - 1 {
            start = end.saturating_sub(MAX_VISIBLE_PAGES - 1).max(1);
        }
        (start..=end).collect()
    }

    /// Counters for the status and pagination labels.
    pub fn summary(&self) -> TableSummary {
        let range = self.page_range();
        let (first_shown, last_shown) = if range.is_empty() {
            (0, 0)
        } else {
            (range.start + 1, range.end)
        };
        TableSummary {
            filtered: self.filtered_len(),
            total: self.total_len(),
            first_shown,
            last_shown,
            current_page: self.current_page,
            total_pages: self.total_pages(),
        }
    }

    /// Message for a page with no rows.
    pub fn empty_message(&self) -> &'static str {
        if self.search_term.is_empty() {
            "No data available."
        } else {
            "No results found for your search."
        }
    }

    fn page_range(&self) -> std::ops::Range<usize> {
        let len = self.derived.len();
        if self.current_page == 0 {
            return 0..0;
        }
        let start = (self.current_page - 1)
            .saturating_mul(self.page_size)
            .min(len);
        let end = start.saturating_add(self.page_size).min(len);
        start..end
    }

    fn derive(&mut self) {
        let needle = self.search_term.to_lowercase();
        let rows = &self.rows;
        let mut matching: Vec<usize> = rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row_matches(row, &needle))
            .map(|(index, _)| index)
            .collect();

        if let Some(sort) = &self.sort {
            matching.sort_by(|&a, &b| compare_rows(&rows[a], &rows[b], sort));
        }

        self.derived = matching;
    }
}
