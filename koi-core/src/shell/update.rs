//! Explorer update logic

use tracing::{debug, info, warn};

use super::{
    messages::{Effect, Message},
    state::AppState,
};
use crate::table::TableView;

/// Applies `message` to `state` and returns the effect to run.
pub fn update(state: &mut AppState, message: Message) -> Effect {
    match message {
        Message::SectionSelected(section) => {
            state.section = section;
            Effect::None
        }

        Message::DispositionToggled(disposition, selected) => {
            state.filters.set_disposition(disposition, selected);
            state.refresh_query();
            Effect::None
        }

        Message::PlanetTypeToggled(planet_type, selected) => {
            state.filters.set_planet_type(planet_type, selected);
            state.refresh_query();
            Effect::None
        }

        Message::HostNameChanged(host_name) => {
            state.filters.set_host_name(host_name);
            state.refresh_query();
            Effect::None
        }

        Message::DetectionMethodSelected(method) => {
            state.filters.set_detection_method(method);
            state.refresh_query();
            Effect::None
        }

        Message::AiGeneratedOnlyToggled(value) => {
            state.filters.set_ai_generated_only(Some(value));
            state.refresh_query();
            Effect::None
        }

        Message::Search => handle_search(state),

        Message::SearchCompleted(result) => {
            state.loading = false;
            state.has_searched = true;
            match result {
                Ok(rows) => {
                    info!(rows = rows.len(), "search completed");
                    state.error = None;
                    state.table = TableView::new(rows);
                }
                Err(message) => {
                    warn!(%message, "search failed");
                    state.error = Some(message);
                }
            }
            Effect::None
        }

        Message::TableSearchChanged(term) => {
            state.table.set_search_term(term);
            Effect::None
        }

        Message::SortToggled(column) => {
            state.table.toggle_sort(&column);
            Effect::None
        }

        Message::PageSelected(page) => {
            state.table.set_page(page);
            Effect::None
        }

        Message::PreviousPage => {
            state.table.previous_page();
            Effect::None
        }

        Message::NextPage => {
            state.table.next_page();
            Effect::None
        }

        Message::Export(kind) => {
            if state.loading {
                debug!(%kind, "export ignored while loading");
                Effect::None
            } else {
                Effect::Export(kind)
            }
        }

        Message::CopyQuery => Effect::CopyQuery(state.query.clone()),
    }
}

fn handle_search(state: &mut AppState) -> Effect {
    if state.loading {
        debug!("search already in flight");
        return Effect::None;
    }

    state.loading = true;
    state.error = None;
    // Table search, sort and page start over with every search.
    state.table = TableView::default();

    info!(query_len = state.query.len(), "launching search");
    Effect::Fetch(state.query.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{export::ExportKind, shell::state::ResultsPanel};
    use koi_model::{Disposition, ExoplanetRow, PlanetType, Section};
    use serde_json::json;

    fn rows(count: usize) -> Vec<ExoplanetRow> {
        (0..count)
            .map(|i| ExoplanetRow::from_pairs([("kepoi_name", json!(format!("K{i:05}.01")))]))
            .collect()
    }

    #[test]
    fn filter_changes_rebuild_the_query() {
        let mut state = AppState::new();
        update(&mut state, Message::DispositionToggled(Disposition::Candidate, false));
        update(&mut state, Message::PlanetTypeToggled(PlanetType::Rocky, true));
        assert!(
            state
                .query()
                .ends_with("WHERE koi_disposition IN ('CONFIRMED') AND (koi_prad < 1.6)")
        );

        update(&mut state, Message::DispositionToggled(Disposition::Confirmed, false));
        update(&mut state, Message::PlanetTypeToggled(PlanetType::Rocky, false));
        assert!(!state.query().contains("WHERE"));
    }

    #[test]
    fn search_fetches_current_query_and_blocks_reentry() {
        let mut state = AppState::new();
        let effect = update(&mut state, Message::Search);
        assert_eq!(effect, Effect::Fetch(state.query().to_string()));
        assert!(state.is_loading());
        assert_eq!(state.search_label(), "Searching...");
        assert!(matches!(state.results_panel(), ResultsPanel::Loading));

        assert_eq!(update(&mut state, Message::Search), Effect::None);
    }

    #[test]
    fn new_search_clears_previous_results_and_error() {
        let mut state = AppState::new();
        update(&mut state, Message::Search);
        update(&mut state, Message::SearchCompleted(Err("boom".into())));
        assert_eq!(state.error(), Some("boom"));

        update(&mut state, Message::Search);
        assert!(state.error().is_none());
        update(&mut state, Message::SearchCompleted(Ok(rows(3))));
        assert_eq!(state.status_line(), "3 records found.");

        update(&mut state, Message::Search);
        assert!(state.results().is_empty());
        assert!(!state.exports_visible());
    }

    #[test]
    fn failure_replaces_results_panel() {
        let mut state = AppState::new();
        update(&mut state, Message::Search);
        update(
            &mut state,
            Message::SearchCompleted(Err("Failed to fetch data.".into())),
        );
        match state.results_panel() {
            ResultsPanel::Failed { title, message } => {
                assert_eq!(title, "Search Failed");
                assert_eq!(message, "Failed to fetch data.");
            }
            other => panic!("unexpected panel {other:?}"),
        }
        assert!(!state.exports_visible());
    }

    #[test]
    fn empty_response_shows_zero_results() {
        let mut state = AppState::new();
        update(&mut state, Message::Search);
        update(&mut state, Message::SearchCompleted(Ok(Vec::new())));
        assert_eq!(state.status_line(), "No records found.");
        assert!(matches!(state.results_panel(), ResultsPanel::Empty(_)));
        assert!(!state.exports_visible());
    }

    #[test]
    fn table_messages_drive_the_view() {
        let mut state = AppState::new();
        update(&mut state, Message::Search);
        update(&mut state, Message::SearchCompleted(Ok(rows(60))));
        update(&mut state, Message::NextPage);
        update(&mut state, Message::NextPage);
        update(&mut state, Message::NextPage);
        assert_eq!(state.table().current_page(), 3);

        update(&mut state, Message::TableSearchChanged("K00042".into()));
        assert_eq!(state.table().current_page(), 1);
        assert_eq!(state.table().filtered_len(), 1);

        update(&mut state, Message::SortToggled("kepoi_name".into()));
        assert!(state.table().sort().is_some());
        update(&mut state, Message::PageSelected(4));
        assert_eq!(state.table().current_page(), 4);
    }

    #[test]
    fn new_search_resets_table_search_sort_and_page() {
        let mut state = AppState::new();
        update(&mut state, Message::Search);
        update(&mut state, Message::SearchCompleted(Ok(rows(60))));
        update(&mut state, Message::TableSearchChanged("K00001".into()));
        update(&mut state, Message::SortToggled("kepoi_name".into()));
        update(&mut state, Message::PageSelected(2));

        update(&mut state, Message::Search);
        assert_eq!(state.table().search_term(), "");
        assert!(state.table().sort().is_none());
        assert_eq!(state.table().current_page(), 1);

        let fresh = vec![
            ExoplanetRow::from_pairs([("kepoi_name", json!("K00999.01"))]),
            ExoplanetRow::from_pairs([("kepoi_name", json!("K00998.01"))]),
        ];
        update(&mut state, Message::SearchCompleted(Ok(fresh)));
        assert_eq!(state.status_line(), "2 records found.");
        let visible: Vec<_> = state
            .table()
            .visible_rows()
            .iter()
            .map(|row| row.text("kepoi_name").unwrap_or_default())
            .collect();
        assert_eq!(visible, ["K00999.01", "K00998.01"]);
    }

    #[test]
    fn exports_and_copy_emit_effects() {
        let mut state = AppState::new();
        assert_eq!(
            update(&mut state, Message::CopyQuery),
            Effect::CopyQuery(state.query().to_string())
        );
        assert_eq!(
            update(&mut state, Message::Export(ExportKind::Json)),
            Effect::Export(ExportKind::Json)
        );
        update(&mut state, Message::Search);
        assert_eq!(
            update(&mut state, Message::Export(ExportKind::Json)),
            Effect::None
        );
    }

    #[test]
    fn ai_toggle_is_stored_without_changing_the_query() {
        let mut state = AppState::new();
        let before = state.query().to_string();
        update(&mut state, Message::SectionSelected(Section::Ia));
        update(&mut state, Message::AiGeneratedOnlyToggled(true));
        assert!(state.shows_ai_toggle());
        assert_eq!(state.filters().ai_generated_only(), Some(true));
        assert_eq!(state.query(), before);
    }
}
