//! Enumerations behind the catalog filters.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::ModelError;

/// Vetting outcome of a Kepler Object of Interest (`koi_disposition`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum Disposition {
    /// Signal not yet confirmed or rejected.
    #[serde(rename = "CANDIDATE")]
    Candidate,
    /// Confirmed exoplanet.
    #[serde(rename = "CONFIRMED")]
    Confirmed,
    /// Signal rejected as a false positive.
    #[serde(rename = "FALSE POSITIVE", alias = "FALSE_POSITIVE")]
    FalsePositive,
}

impl Disposition {
    /// All dispositions in the order the filter panel lists them.
    pub fn all() -> &'static [Disposition] {
        use Disposition::*;
        &[Candidate, Confirmed, FalsePositive]
    }

    /// Literal stored in the catalog's `koi_disposition` column.
    pub fn catalog_value(&self) -> &'static str {
        match self {
            Disposition::Candidate => "CANDIDATE",
            Disposition::Confirmed => "CONFIRMED",
            Disposition::FalsePositive => "FALSE POSITIVE",
        }
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.catalog_value())
    }
}

impl FromStr for Disposition {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CANDIDATE" => Ok(Disposition::Candidate),
            "CONFIRMED" => Ok(Disposition::Confirmed),
            "FALSE POSITIVE" | "FALSE_POSITIVE" => {
                Ok(Disposition::FalsePositive)
            }
            _ => Err(ModelError::UnknownDisposition(s.to_string())),
        }
    }
}

/// Planet-size bucket derived from the planetary radius (`koi_prad`, Earth
/// radii).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanetType {
    /// Radius below 1.6 Earth radii.
    Rocky,
    /// Radius in `[1.6, 4)` Earth radii.
    SuperEarth,
    /// Radius of 4 Earth radii or more.
    GasGiant,
}

impl PlanetType {
    /// All planet types in display order.
    pub fn all() -> &'static [PlanetType] {
        use PlanetType::*;
        &[Rocky, SuperEarth, GasGiant]
    }

    /// Stable identifier used on the wire and in raw filter input.
    pub fn api_name(&self) -> &'static str {
        match self {
            PlanetType::Rocky => "ROCKY",
            PlanetType::SuperEarth => "SUPER_EARTH",
            PlanetType::GasGiant => "GAS_GIANT",
        }
    }

    /// Human readable label for the filter panel.
    pub fn label(&self) -> &'static str {
        match self {
            PlanetType::Rocky => "Rocky",
            PlanetType::SuperEarth => "Super-Earth",
            PlanetType::GasGiant => "Gas Giant",
        }
    }

    /// Radius bounds in Earth radii as `(inclusive lower, exclusive upper)`.
    pub fn radius_bounds(&self) -> (Option<f64>, Option<f64>) {
        match self {
            PlanetType::Rocky => (None, Some(1.6)),
            PlanetType::SuperEarth => (Some(1.6), Some(4.0)),
            PlanetType::GasGiant => (Some(4.0), None),
        }
    }
}

impl fmt::Display for PlanetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.api_name())
    }
}

impl FromStr for PlanetType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ROCKY" => Ok(PlanetType::Rocky),
            "SUPER_EARTH" | "SUPER-EARTH" => Ok(PlanetType::SuperEarth),
            "GAS_GIANT" | "GAS GIANT" => Ok(PlanetType::GasGiant),
            _ => Err(ModelError::UnknownPlanetType(s.to_string())),
        }
    }
}

/// Discovery technique offered by the filter panel.
///
/// The `cumulative` table only holds transit detections, so the query
/// builder never turns this into a clause.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum DetectionMethod {
    /// Transit photometry.
    Transit,
    /// Doppler spectroscopy.
    #[serde(rename = "Radial Velocity")]
    RadialVelocity,
    /// Direct imaging.
    Imaging,
    /// Gravitational microlensing.
    Microlensing,
}

impl DetectionMethod {
    /// All detection methods in display order.
    pub fn all() -> &'static [DetectionMethod] {
        use DetectionMethod::*;
        &[Transit, RadialVelocity, Imaging, Microlensing]
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            DetectionMethod::Transit => "Transit",
            DetectionMethod::RadialVelocity => "Radial Velocity",
            DetectionMethod::Imaging => "Imaging",
            DetectionMethod::Microlensing => "Microlensing",
        }
    }
}

impl fmt::Display for DetectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for DetectionMethod {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        DetectionMethod::all()
            .iter()
            .copied()
            .find(|method| method.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ModelError::UnknownDetectionMethod(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn false_positive_uses_catalog_literal() {
        assert_eq!(Disposition::FalsePositive.catalog_value(), "FALSE POSITIVE");
        assert_eq!(
            serde_json::to_string(&Disposition::FalsePositive).unwrap(),
            "\"FALSE POSITIVE\""
        );
        let parsed: Disposition =
            serde_json::from_str("\"FALSE_POSITIVE\"").unwrap();
        assert_eq!(parsed, Disposition::FalsePositive);
    }

    #[test]
    fn parses_enum_names_case_insensitively() {
        assert_eq!("confirmed".parse(), Ok(Disposition::Confirmed));
        assert_eq!("super_earth".parse(), Ok(PlanetType::SuperEarth));
        assert_eq!(
            "radial velocity".parse(),
            Ok(DetectionMethod::RadialVelocity)
        );
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(
            "HOT_JUPITER".parse::<PlanetType>(),
            Err(ModelError::UnknownPlanetType("HOT_JUPITER".into()))
        );
        assert!("REFUTED".parse::<Disposition>().is_err());
    }
}
