//! Vintage year extraction.
//!
//! Vintage fields are free text ("2016", "1998 Barrel Reserve", "NV").
//! The display year is the first standalone four-digit number starting
//! with `19` or `20`. No plausibility check beyond that pattern.

use regex_lite::Regex;
use std::sync::LazyLock;

use crate::models::NOT_AVAILABLE;

static YEAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^0-9])((?:19|20)[0-9]{2})(?:[^0-9]|$)").expect("year pattern is valid")
});

/// Return the embedded year, or `"N/A"` when there is none.
pub fn extract_year(vintage: Option<&str>) -> String {
    find_year(vintage)
        .map(str::to_string)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// The embedded year as a number, for sorting and statistics.
pub fn year_value(vintage: Option<&str>) -> Option<u16> {
    find_year(vintage).and_then(|y| y.parse().ok())
}

fn find_year(vintage: Option<&str>) -> Option<&str> {
    let text = vintage?;
    YEAR_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_year() {
        assert_eq!(extract_year(Some("1998 Barrel Reserve")), "1998");
    }

    #[test]
    fn test_embedded_year() {
        assert_eq!(extract_year(Some("Riserva 2015")), "2015");
        assert_eq!(extract_year(Some("(2009)")), "2009");
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(extract_year(Some("1999 Reserve, bottled 2003")), "1999");
    }

    #[test]
    fn test_empty_or_missing() {
        assert_eq!(extract_year(Some("")), "N/A");
        assert_eq!(extract_year(None), "N/A");
    }

    #[test]
    fn test_no_digits() {
        assert_eq!(extract_year(Some("Barrel Reserve")), "N/A");
        assert_eq!(extract_year(Some("NV")), "N/A");
    }

    #[test]
    fn test_out_of_range_prefix() {
        assert_eq!(extract_year(Some("1899")), "N/A");
        assert_eq!(extract_year(Some("2100")), "N/A");
    }

    #[test]
    fn test_longer_digit_runs_rejected() {
        assert_eq!(extract_year(Some("Lot 19990")), "N/A");
        assert_eq!(extract_year(Some("Lot 120001, 2012")), "2012");
    }

    #[test]
    fn test_year_value() {
        assert_eq!(year_value(Some("2019")), Some(2019));
        assert_eq!(year_value(Some("NV")), None);
    }
}
