//! Number formatting shared by the table renderer and the exporters.

/// Formats `value` with exactly `decimals` fractional digits.
pub fn fixed(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

/// Rounds half-way cases towards positive infinity (`2.5 -> 3`, `-2.5 -> -2`).
pub fn round_half_up(value: f64) -> f64 {
    let rounded = (value + 0.5).floor();
    // Normalise -0 so it prints as "0".
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Integer text of `value` after [`round_half_up`].
pub fn rounded(value: f64) -> String {
    round_half_up(value).to_string()
}

/// Shortest decimal form of `value`; whole numbers print without a fraction.
pub fn plain(value: f64) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_pads_and_truncates() {
        assert_eq!(fixed(9.488035570, 6), "9.488036");
        assert_eq!(fixed(2.0, 3), "2.000");
        assert_eq!(fixed(0.8, 2), "0.80");
    }

    #[test]
    fn rounding_matches_half_up() {
        assert_eq!(rounded(5455.5), "5456");
        assert_eq!(rounded(-2.5), "-2");
        assert_eq!(rounded(-0.2), "0");
        assert_eq!(rounded(793.0), "793");
    }

    #[test]
    fn plain_drops_trailing_zero_fraction() {
        assert_eq!(plain(3.0), "3");
        assert_eq!(plain(0.146), "0.146");
    }
}
