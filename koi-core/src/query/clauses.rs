//! Individual WHERE-clause fragments.
//!
//! Literals are embedded verbatim between single quotes. Host names and
//! dispositions are trusted input, so embedded quotes are not escaped.

use koi_model::{Disposition, PlanetType};

/// Column holding the vetting outcome.
pub const DISPOSITION_COLUMN: &str = "koi_disposition";
/// Column holding the confirmed planet name.
pub const HOST_NAME_COLUMN: &str = "kepler_name";
/// Column holding the planetary radius in Earth radii.
pub const RADIUS_COLUMN: &str = "koi_prad";

/// `koi_disposition IN ('A', 'B')`, in selection order.
pub fn disposition_clause(dispositions: &[Disposition]) -> Option<String> {
    if dispositions.is_empty() {
        return None;
    }
    let values = dispositions
        .iter()
        .map(|d| format!("'{}'", d.catalog_value()))
        .collect::<Vec<_>>()
        .join(", ");
    Some(format!("{DISPOSITION_COLUMN} IN ({values})"))
}

/// `kepler_name LIKE '%name%'` for an already trimmed, non-empty name.
pub fn host_name_clause(host_name: Option<&str>) -> Option<String> {
    host_name
        .filter(|name| !name.is_empty())
        .map(|name| format!("{HOST_NAME_COLUMN} LIKE '%{name}%'"))
}

/// Radius predicate for a single planet type.
pub fn planet_type_predicate(planet_type: PlanetType) -> String {
    match planet_type.radius_bounds() {
        (None, Some(upper)) => format!("{RADIUS_COLUMN} < {upper}"),
        (Some(lower), None) => format!("{RADIUS_COLUMN} >= {lower}"),
        (Some(lower), Some(upper)) => format!(
            "({RADIUS_COLUMN} >= {lower} AND {RADIUS_COLUMN} < {upper})"
        ),
        (None, None) => format!("{RADIUS_COLUMN} IS NOT NULL"),
    }
}

/// OR-group of radius predicates wrapped in parentheses.
pub fn planet_type_clause(planet_types: &[PlanetType]) -> Option<String> {
    let predicates: Vec<String> = planet_types
        .iter()
        .copied()
        .map(planet_type_predicate)
        .collect();
    if predicates.is_empty() {
        return None;
    }
    Some(format!("({})", predicates.join(" OR ")))
}
