//! Helpers for reading environment variables.

use std::str::FromStr;

/// Reads `name`, treating unset and blank values alike.
pub fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
}

/// Reads and parses `name`; unparsable values are ignored.
pub fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    non_empty_var(name).and_then(|raw| raw.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_variable_reads_as_none() {
        assert_eq!(non_empty_var("KOI_TEST_SURELY_UNSET_VARIABLE"), None);
        assert_eq!(parse_var::<u16>("KOI_TEST_SURELY_UNSET_VARIABLE"), None);
    }
}
