use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::ModelError;

/// Top-level explorer section.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Section {
    /// Catalog search against the NASA archive.
    #[default]
    Nasa,
    /// AI mode; exposes the AI-generated-only toggle.
    Ia,
}

impl Section {
    /// Navigation label.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Nasa => "NASA",
            Section::Ia => "IA",
        }
    }

    /// Whether the AI-only filter is offered in this section.
    pub fn shows_ai_toggle(&self) -> bool {
        matches!(self, Section::Ia)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Section {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NASA" => Ok(Section::Nasa),
            "IA" | "AI" => Ok(Section::Ia),
            _ => Err(ModelError::UnknownSection(s.to_string())),
        }
    }
}
