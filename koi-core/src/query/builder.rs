use koi_model::{
    CATALOG_TABLE, DetectionMethod, Disposition, FilterState, PlanetType,
    RESULT_COLUMNS,
};

use super::clauses::{disposition_clause, host_name_clause, planet_type_clause};

/// `SELECT <columns> FROM cumulative`.
pub fn select_clause() -> String {
    format!("SELECT {} FROM {CATALOG_TABLE}", RESULT_COLUMNS.join(", "))
}

/// WHERE clauses contributed by `filters`, in their fixed order:
/// dispositions, host name, planet types.
///
/// The detection method never contributes a clause; the catalog only holds
/// transit detections.
pub fn where_clauses(filters: &FilterState) -> Vec<String> {
    [
        disposition_clause(filters.dispositions()),
        host_name_clause(filters.host_name_filter()),
        planet_type_clause(filters.planet_types()),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Builds the ADQL query for `filters`.
///
/// ```
/// use koi_core::query::build_query;
/// use koi_model::FilterState;
///
/// let query = build_query(&FilterState::new());
/// assert!(query.ends_with(" FROM cumulative"));
/// ```
pub fn build_query(filters: &FilterState) -> String {
    let clauses = where_clauses(filters);
    let select = select_clause();
    if clauses.is_empty() {
        select
    } else {
        format!("{select} WHERE {}", clauses.join(" AND "))
    }
}

/// Fluent API for building catalog queries
#[derive(Debug, Clone, Default)]
pub struct CatalogQueryBuilder {
    filters: FilterState,
}

impl CatalogQueryBuilder {
    /// Create a builder with no filters
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing filter state
    pub fn from_filters(filters: FilterState) -> Self {
        Self { filters }
    }

    /// Restrict to a disposition
    pub fn disposition(mut self, disposition: Disposition) -> Self {
        self.filters.set_disposition(disposition, true);
        self
    }

    /// Restrict to several dispositions
    pub fn dispositions(
        mut self,
        dispositions: impl IntoIterator<Item = Disposition>,
    ) -> Self {
        for disposition in dispositions {
            self.filters.set_disposition(disposition, true);
        }
        self
    }

    /// Restrict to a planet-size bucket
    pub fn planet_type(mut self, planet_type: PlanetType) -> Self {
        self.filters.set_planet_type(planet_type, true);
        self
    }

    /// Restrict to a planet-size bucket given by name; unknown names are ignored
    pub fn planet_type_name(self, name: &str) -> Self {
        match name.parse::<PlanetType>() {
            Ok(planet_type) => self.planet_type(planet_type),
            Err(err) => {
                tracing::debug!(%err, "ignoring planet type filter");
                self
            }
        }
    }

    /// Match Kepler names containing `host_name`
    pub fn host_name(mut self, host_name: impl Into<String>) -> Self {
        self.filters.set_host_name(host_name);
        self
    }

    /// Record a detection method (no effect on the query)
    pub fn detection_method(mut self, method: DetectionMethod) -> Self {
        self.filters.set_detection_method(Some(method));
        self
    }

    /// Set the AI-mode toggle
    pub fn ai_generated_only(mut self, value: bool) -> Self {
        self.filters.set_ai_generated_only(Some(value));
        self
    }

    /// Filters accumulated so far
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Consume the builder into its filter state
    pub fn into_filters(self) -> FilterState {
        self.filters
    }

    /// WHERE clauses the current filters produce
    pub fn where_clauses(&self) -> Vec<String> {
        where_clauses(&self.filters)
    }

    /// Build the query string
    pub fn build(&self) -> String {
        build_query(&self.filters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn where_part(query: &str) -> Option<&str> {
        query.split_once(" WHERE ").map(|(_, clauses)| clauses)
    }

    #[test]
    fn empty_filters_have_no_where_clause() {
        let query = build_query(&FilterState::new());
        assert!(!query.contains("WHERE"));
        assert_eq!(query, select_clause());
    }

    #[test]
    fn select_lists_explicit_columns() {
        let query = build_query(&FilterState::new());
        assert!(query.starts_with("SELECT dec, dec_err, dec_str, kepid, "));
        assert!(query.ends_with("ra, ra_err, ra_str, rowid FROM cumulative"));
        assert!(!query.contains('*'));
    }

    #[test]
    fn disposition_clause_is_exact() {
        let query = CatalogQueryBuilder::new()
            .disposition(Disposition::Candidate)
            .disposition(Disposition::Confirmed)
            .build();
        assert_eq!(
            where_part(&query),
            Some("koi_disposition IN ('CANDIDATE', 'CONFIRMED')")
        );
    }

    #[test]
    fn planet_types_form_an_or_group() {
        let query = CatalogQueryBuilder::new()
            .planet_type(PlanetType::Rocky)
            .planet_type(PlanetType::GasGiant)
            .build();
        assert_eq!(
            where_part(&query),
            Some("(koi_prad < 1.6 OR koi_prad >= 4)")
        );
    }

    #[test]
    fn clauses_join_in_fixed_order() {
        let query = CatalogQueryBuilder::new()
            .planet_type(PlanetType::SuperEarth)
            .host_name("  Kepler-22 ")
            .disposition(Disposition::Confirmed)
            .build();
        assert_eq!(
            where_part(&query),
            Some(
                "koi_disposition IN ('CONFIRMED') AND kepler_name LIKE '%Kepler-22%' \
                 AND ((koi_prad >= 1.6 AND koi_prad < 4))"
            )
        );
    }

    #[test]
    fn detection_method_and_ai_toggle_add_nothing() {
        let builder = CatalogQueryBuilder::new()
            .detection_method(DetectionMethod::RadialVelocity)
            .ai_generated_only(true);
        assert!(builder.where_clauses().is_empty());
        assert_eq!(
            builder.filters().detection_method(),
            Some(DetectionMethod::RadialVelocity)
        );
    }

    #[test]
    fn unknown_planet_type_names_are_dropped() {
        let builder = CatalogQueryBuilder::new().planet_type_name("HOT_JUPITER");
        assert!(builder.where_clauses().is_empty());
        assert!(!builder.build().contains("WHERE"));
    }

    #[test]
    fn blank_host_name_is_ignored() {
        let query = CatalogQueryBuilder::new().host_name("   ").build();
        assert!(!query.contains("WHERE"));
    }
}
