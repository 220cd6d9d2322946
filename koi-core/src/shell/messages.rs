use koi_model::{DetectionMethod, Disposition, ExoplanetRow, PlanetType, Section};

use crate::export::ExportKind;

/// Explorer messages
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Navigation
    /// Switch between the catalog and AI sections
    SectionSelected(Section),

    // Filters
    /// Select or deselect a disposition
    DispositionToggled(Disposition, bool),
    /// Select or deselect a planet-size bucket
    PlanetTypeToggled(PlanetType, bool),
    /// Host name input changed
    HostNameChanged(String),
    /// Detection method picked (or cleared)
    DetectionMethodSelected(Option<DetectionMethod>),
    /// AI-generated-only toggle changed
    AiGeneratedOnlyToggled(bool),

    // Search
    /// Launch a search with the current query
    Search,
    /// Search finished; the error is already a user-facing message
    SearchCompleted(Result<Vec<ExoplanetRow>, String>),

    // Results table
    /// Table search input changed
    TableSearchChanged(String),
    /// Header clicked
    SortToggled(String),
    /// Page button clicked
    PageSelected(usize),
    /// Previous-page control clicked
    PreviousPage,
    /// Next-page control clicked
    NextPage,

    // Output
    /// Download the results
    Export(ExportKind),
    /// Copy the generated query
    CopyQuery,
}

impl Message {
    /// Convert to string for debugging
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SectionSelected(_) => "SectionSelected",
            Self::DispositionToggled(..) => "DispositionToggled",
            Self::PlanetTypeToggled(..) => "PlanetTypeToggled",
            Self::HostNameChanged(_) => "HostNameChanged",
            Self::DetectionMethodSelected(_) => "DetectionMethodSelected",
            Self::AiGeneratedOnlyToggled(_) => "AiGeneratedOnlyToggled",
            Self::Search => "Search",
            Self::SearchCompleted(_) => "SearchCompleted",
            Self::TableSearchChanged(_) => "TableSearchChanged",
            Self::SortToggled(_) => "SortToggled",
            Self::PageSelected(_) => "PageSelected",
            Self::PreviousPage => "PreviousPage",
            Self::NextPage => "NextPage",
            Self::Export(_) => "Export",
            Self::CopyQuery => "CopyQuery",
        }
    }
}

/// Work requested by [`update`](super::update) that happens outside the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing to do
    None,
    /// Run this query against the catalog source
    Fetch(String),
    /// Serialise the current results and hand them to the file sink
    Export(ExportKind),
    /// Put this text on the clipboard
    CopyQuery(String),
}
