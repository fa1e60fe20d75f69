// Utility helpers for parsing and formatting.
//
// This module centralizes the percentage-string handling so the rest of the
// code can assume clean fractional values.
use num_format::{Locale, ToFormattedString};

/// Parse a percentage cell like `"12.5%"` into a fraction (`0.125`).
///
/// - Trims surrounding whitespace.
/// - Requires a trailing `%`; a bare number is malformed, not a silent NaN.
/// - Divides the numeric remainder by 100. No clamping: shares above 100%
///   are legal in this dataset and pass through as values above 1.0.
/// - Returns `None` for anything else.
pub fn parse_percent(s: &str) -> Option<f64> {
    let s = s.trim();
    let num = s.strip_suffix('%')?;
    num.trim().parse::<f64>().ok().map(|v| v / 100.0)
}

pub fn average(v: &[f64]) -> f64 {
    // Standard arithmetic mean; returns 0 for an empty slice to avoid NaNs.
    if v.is_empty() {
        return 0.0;
    }
    let sum: f64 = v.iter().copied().sum();
    sum / v.len() as f64
}

/// Render a fraction back as a percentage string with two decimals
/// (`0.125` becomes `"12.50%"`).
pub fn format_share(frac: f64) -> String {
    format!("{:.2}%", frac * 100.0)
}

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    // Thin wrapper around `num-format` for integer-like values, used for
    // counts in console messages (e.g., `29 rows loaded`).
    n.to_formatted_string(&Locale::en)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_percent_valid() {
        assert_eq!(parse_percent("12.5%"), Some(0.125));
        assert_eq!(parse_percent("0%"), Some(0.0));
        assert_eq!(parse_percent(" 42.0% "), Some(0.42));
    }

    #[test]
    fn parse_percent_does_not_clamp() {
        // Shares above 100% are legal in the source domain.
        assert_eq!(parse_percent("150%"), Some(1.5));
    }

    #[test]
    fn parse_percent_rejects_malformed() {
        assert_eq!(parse_percent("12.5"), None);
        assert_eq!(parse_percent("abc%"), None);
        assert_eq!(parse_percent("%"), None);
        assert_eq!(parse_percent(""), None);
    }

    #[test]
    fn parse_percent_round_trips() {
        for raw in ["0.1%", "12.5%", "99.99%", "100%"] {
            let frac = parse_percent(raw).unwrap();
            let back: f64 = raw.trim_end_matches('%').parse().unwrap();
            assert!((frac * 100.0 - back).abs() < 1e-9);
        }
    }

    #[test]
    fn format_share_two_decimals() {
        assert_eq!(format_share(0.125), "12.50%");
        assert_eq!(format_share(0.0), "0.00%");
    }

    #[test]
    fn average_handles_empty() {
        assert_eq!(average(&[]), 0.0);
        assert_eq!(average(&[0.1, 0.3]), 0.2);
    }
}
