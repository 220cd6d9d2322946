use crate::filter_types::{DetectionMethod, Disposition, PlanetType};

/// User-selected catalog filters.
///
/// Empty selections mean "no filter applied". Selections keep the order in
/// which they were made and never hold the same value twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    dispositions: Vec<Disposition>,
    planet_types: Vec<PlanetType>,
    host_name: String,
    detection_method: Option<DetectionMethod>,
    ai_generated_only: Option<bool>,
}

impl FilterState {
    /// Empty filter state: every row of the catalog matches.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters shown when the explorer first opens: candidates and
    /// confirmed planets.
    pub fn initial() -> Self {
        let mut state = Self::default();
        state.set_disposition(Disposition::Candidate, true);
        state.set_disposition(Disposition::Confirmed, true);
        state
    }

    /// Builds a filter state from raw, untrusted names.
    ///
    /// Names that do not parse are dropped without error.
    pub fn from_raw<D, P>(dispositions: D, planet_types: P, host_name: &str) -> Self
    where
        D: IntoIterator,
        D::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: AsRef<str>,
    {
        let mut state = Self::default();
        for disposition in dispositions
            .into_iter()
            .filter_map(|raw| raw.as_ref().parse::<Disposition>().ok())
        {
            state.set_disposition(disposition, true);
        }
        for planet_type in planet_types
            .into_iter()
            .filter_map(|raw| raw.as_ref().parse::<PlanetType>().ok())
        {
            state.set_planet_type(planet_type, true);
        }
        state.set_host_name(host_name);
        state
    }

    /// Selected dispositions in selection order.
    pub fn dispositions(&self) -> &[Disposition] {
        &self.dispositions
    }

    /// Selected planet types in selection order.
    pub fn planet_types(&self) -> &[PlanetType] {
        &self.planet_types
    }

    /// Raw host-name text as typed.
    pub fn host_name(&self) -> &str {
        &self.host_name
    }

    /// Host-name substring to match, trimmed; `None` when blank.
    pub fn host_name_filter(&self) -> Option<&str> {
        let trimmed = self.host_name.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Selected detection method, if any.
    pub fn detection_method(&self) -> Option<DetectionMethod> {
        self.detection_method
    }

    /// AI-mode toggle. `None` outside of the AI section.
    pub fn ai_generated_only(&self) -> Option<bool> {
        self.ai_generated_only
    }

    /// Checks or unchecks a disposition.
    pub fn set_disposition(&mut self, disposition: Disposition, selected: bool) {
        toggle_member(&mut self.dispositions, disposition, selected);
    }

    /// Checks or unchecks a planet type.
    pub fn set_planet_type(&mut self, planet_type: PlanetType, selected: bool) {
        toggle_member(&mut self.planet_types, planet_type, selected);
    }

    /// Replaces the host-name text.
    pub fn set_host_name(&mut self, host_name: impl Into<String>) {
        self.host_name = host_name.into();
    }

    /// Selects a detection method. Accepted for completeness only.
    pub fn set_detection_method(&mut self, method: Option<DetectionMethod>) {
        self.detection_method = method;
    }

    /// Sets the AI-mode toggle.
    pub fn set_ai_generated_only(&mut self, value: Option<bool>) {
        self.ai_generated_only = value;
    }

    /// True when no filter contributes a clause.
    pub fn is_unfiltered(&self) -> bool {
        self.dispositions.is_empty()
            && self.planet_types.is_empty()
            && self.host_name_filter().is_none()
    }
}

fn toggle_member<T: PartialEq>(values: &mut Vec<T>, value: T, selected: bool) {
    let present = values.contains(&value);
    if selected && !present {
        values.push(value);
    } else if !selected && present {
        values.retain(|existing| *existing != value);
    }
}
