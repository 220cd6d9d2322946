use thiserror::Error;

/// Errors raised when parsing catalog enums from external input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// The value is not a known KOI disposition.
    #[error("unknown disposition '{0}'")]
    UnknownDisposition(String),

    /// The value is not a known planet-type bucket.
    #[error("unknown planet type '{0}'")]
    UnknownPlanetType(String),

    /// The value is not a known detection method.
    #[error("unknown detection method '{0}'")]
    UnknownDetectionMethod(String),

    /// The value is not a known UI section.
    #[error("unknown section '{0}'")]
    UnknownSection(String),
}
