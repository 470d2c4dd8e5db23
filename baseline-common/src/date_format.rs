//! Human-readable date formatting for baseline availability dates
//!
//! The API reports availability dates as ISO strings, historically in three
//! precisions: full date, year-month, and bare year. Display formatting is
//! en-US "Month Year" (or the year alone for year-only input). Formatting is
//! pure and never fails: empty input yields an empty string, anything
//! unparseable yields the "Invalid Date" sentinel.

use chrono::NaiveDate;

/// Sentinel returned for unparseable date strings
pub const INVALID_DATE: &str = "Invalid Date";

/// Format an ISO date string as "Month Year".
///
/// # Examples
///
/// ```
/// use baseline_common::date_format::format_month_year;
///
/// assert_eq!(format_month_year("2017-03-15"), "March 2017");
/// assert_eq!(format_month_year("2022-09"), "September 2022");
/// assert_eq!(format_month_year("2017"), "2017");
/// assert_eq!(format_month_year(""), "");
/// assert_eq!(format_month_year("invalid-date"), "Invalid Date");
/// ```
pub fn format_month_year(date: &str) -> String {
    let date = date.trim();
    if date.is_empty() {
        return String::new();
    }

    if let Ok(parsed) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return parsed.format("%B %Y").to_string();
    }

    // Year-month precision: normalize to the first of the month
    if date.len() == 7 {
        if let Ok(parsed) = NaiveDate::parse_from_str(&format!("{date}-01"), "%Y-%m-%d") {
            return parsed.format("%B %Y").to_string();
        }
    }

    // Bare year
    if date.len() == 4 && date.chars().all(|c| c.is_ascii_digit()) {
        return date.to_string();
    }

    INVALID_DATE.to_string()
}

/// Format an optional date string; `None` yields an empty string.
pub fn format_month_year_opt(date: Option<&str>) -> String {
    match date {
        Some(date) => format_month_year(date),
        None => String::new(),
    }
}

/// Year component of a formatted date, empty for empty or invalid input.
///
/// # Examples
///
/// ```
/// use baseline_common::date_format::year_of;
///
/// assert_eq!(year_of("2022-09-01"), "2022");
/// assert_eq!(year_of(""), "");
/// ```
pub fn year_of(date: &str) -> String {
    let formatted = format_month_year(date);
    if formatted.is_empty() || formatted == INVALID_DATE {
        return String::new();
    }
    formatted
        .rsplit(' ')
        .next()
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_dates() {
        assert_eq!(format_month_year("2017-03-15"), "March 2017");
        assert_eq!(format_month_year("2022-01-01"), "January 2022");
        assert_eq!(format_month_year("2023-12-25"), "December 2023");
    }

    #[test]
    fn test_year_month_precision() {
        assert_eq!(format_month_year("2015-09"), "September 2015");
        assert_eq!(format_month_year("2024-02"), "February 2024");
    }

    #[test]
    fn test_year_only_precision() {
        assert_eq!(format_month_year("2017"), "2017");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(format_month_year(""), "");
        assert_eq!(format_month_year("   "), "");
    }

    #[test]
    fn test_invalid_input_is_sentinel() {
        assert_eq!(format_month_year("invalid-date"), INVALID_DATE);
        assert_eq!(format_month_year("2017-13-01"), INVALID_DATE); // month 13
        assert_eq!(format_month_year("2017-02-30"), INVALID_DATE); // day 30 in Feb
        assert_eq!(format_month_year("17-03"), INVALID_DATE);
        assert_eq!(format_month_year("20170315"), INVALID_DATE);
    }

    #[test]
    fn test_option_handling() {
        assert_eq!(format_month_year_opt(Some("2017-03-15")), "March 2017");
        assert_eq!(format_month_year_opt(None), "");
    }

    #[test]
    fn test_year_of() {
        assert_eq!(year_of("2022-09-01"), "2022");
        assert_eq!(year_of("2015-09"), "2015");
        assert_eq!(year_of("2017"), "2017");
        assert_eq!(year_of(""), "");
        assert_eq!(year_of("invalid-date"), "");
    }
}
