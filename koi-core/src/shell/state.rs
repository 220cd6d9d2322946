//! Explorer state and what it shows.

use koi_model::{ExoplanetRow, FilterState, Section};

use crate::{query::build_query, table::TableView};

/// Status line shown before the first search.
pub const READY_MESSAGE: &str = "Ready to search the stars.";

/// Results area text when a search came back empty (or none ran yet).
pub const NO_RESULTS_MESSAGE: &str =
    "No results to display. Adjust your filters and launch a search.";

/// Heading of the failure panel.
pub const FAILURE_TITLE: &str = "Search Failed";

/// Everything the explorer shows, owned in one place.
///
/// The query is always derived from the filters; it is rebuilt on every
/// filter change and never edited directly.
#[derive(Debug, Clone)]
pub struct AppState {
    pub(crate) section: Section,
    pub(crate) filters: FilterState,
    pub(crate) query: String,
    pub(crate) table: TableView,
    pub(crate) loading: bool,
    pub(crate) error: Option<String>,
    pub(crate) has_searched: bool,
}

/// What occupies the results area.
#[derive(Debug, Clone, Copy)]
pub enum ResultsPanel<'a> {
    /// A search is in flight.
    Loading,
    /// The last search failed.
    Failed {
        /// Heading of the failure box.
        title: &'static str,
        /// User-facing reason.
        message: &'a str,
    },
    /// No rows yet, with the hint to show.
    Empty(&'static str),
    /// Rows to show.
    Table(&'a TableView),
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Fresh state with the initial filter selection.
    pub fn new() -> Self {
        Self::with_filters(FilterState::initial())
    }

    /// Fresh state starting from `filters`.
    pub fn with_filters(filters: FilterState) -> Self {
        let query = build_query(&filters);
        Self {
            section: Section::default(),
            filters,
            query,
            table: TableView::default(),
            loading: false,
            error: None,
            has_searched: false,
        }
    }

    /// Active section.
    pub fn section(&self) -> Section {
        self.section
    }

    /// Current filter selection.
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Current ADQL query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Table view over the last results.
    pub fn table(&self) -> &TableView {
        &self.table
    }

    /// Rows of the last successful search, in fetch order.
    pub fn results(&self) -> &[ExoplanetRow] {
        self.table.rows()
    }

    /// Whether a search is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message of the last failed search.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether any search has completed.
    pub fn has_searched(&self) -> bool {
        self.has_searched
    }

    /// Whether the AI-only toggle is offered.
    pub fn shows_ai_toggle(&self) -> bool {
        self.section.shows_ai_toggle()
    }

    /// Caption of the search button.
    pub fn search_label(&self) -> &'static str {
        if self.loading {
            "Searching..."
        } else {
            "Launch Search"
        }
    }

    /// Whether the search button accepts clicks.
    pub fn search_enabled(&self) -> bool {
        !self.loading
    }

    /// Line above the results: ready, no records, or the record count.
    pub fn status_line(&self) -> String {
        match self.results().len() {
            0 if self.has_searched && !self.loading && self.error.is_none() => {
                "No records found.".to_string()
            }
            0 => READY_MESSAGE.to_string(),
            count => format!("{count} records found."),
        }
    }

    /// Export buttons appear only once there is something to export.
    pub fn exports_visible(&self) -> bool {
        !self.results().is_empty()
    }

    /// Export buttons are disabled while a search is running.
    pub fn exports_enabled(&self) -> bool {
        self.exports_visible() && !self.loading
    }

    /// Loading wins over a failure, which wins over the table.
    pub fn results_panel(&self) -> ResultsPanel<'_> {
        if self.loading {
            ResultsPanel::Loading
        } else if let Some(message) = &self.error {
            ResultsPanel::Failed {
                title: FAILURE_TITLE,
                message,
            }
        } else if self.results().is_empty() {
            ResultsPanel::Empty(NO_RESULTS_MESSAGE)
        } else {
            ResultsPanel::Table(&self.table)
        }
    }

    pub(crate) fn refresh_query(&mut self) {
        self.query = build_query(&self.filters);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use koi_model::Disposition;

    #[test]
    fn starts_ready_with_initial_filters() {
        let state = AppState::new();
        assert_eq!(
            state.filters().dispositions(),
            &[Disposition::Candidate, Disposition::Confirmed]
        );
        assert!(
            state
                .query()
                .ends_with("WHERE koi_disposition IN ('CANDIDATE', 'CONFIRMED')")
        );
        assert_eq!(state.status_line(), READY_MESSAGE);
        assert!(!state.exports_visible());
        assert!(matches!(state.results_panel(), ResultsPanel::Empty(_)));
        assert_eq!(state.search_label(), "Launch Search");
    }
}
