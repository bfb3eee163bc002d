//! Release date standardization to ISO 8601 (`YYYY-MM-DD`).

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

/// Parenthesized notes such as `"(Early Access)"`.
static PARENTHESIZED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(.*?\)").expect("Invalid parenthesized regex"));

static YEAR_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}$").expect("Invalid year-only regex"));

static EMBEDDED_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").expect("Invalid embedded year regex"));

/// Day-level patterns, tried in order. The first that parses wins, so US
/// month/day order takes precedence over day/month for slash dates.
const DATE_FORMATS: &[&str] = &[
    "%b %d, %Y",
    "%B %d, %Y",
    "%d %b, %Y",
    "%d %B, %Y",
    "%d %b %Y",
    "%d %B %Y",
    "%b %d %Y",
    "%B %d %Y",
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
];

/// Placeholders for unknown or unannounced dates.
const UNKNOWN_DATES: &[&str] = &["N/A", "TBA"];

/// Convert a scraped release date to `YYYY-MM-DD`.
///
/// Year-only values resolve to January 1st. When no pattern matches, a
/// four-digit year from 1900-2099 anywhere in the text is used instead.
pub fn standardize_date(value: Option<&str>) -> Option<String> {
    let value = value?.trim();
    if value.is_empty() || UNKNOWN_DATES.iter().any(|t| value.eq_ignore_ascii_case(t)) {
        return None;
    }

    let without_notes = PARENTHESIZED.replace_all(value, "");
    let cleaned = without_notes.trim();

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(cleaned, format)
            && has_full_year(&date)
        {
            return Some(date.format("%Y-%m-%d").to_string());
        }
    }

    if YEAR_ONLY.is_match(cleaned) {
        return NaiveDate::parse_from_str(&format!("{cleaned}-01-01"), "%Y-%m-%d")
            .ok()
            .filter(has_full_year)
            .map(|date| date.format("%Y-%m-%d").to_string());
    }

    EMBEDDED_YEAR
        .find(cleaned)
        .map(|year| format!("{}-01-01", year.as_str()))
}

/// chrono's `%Y` accepts short years; scraped dates always carry four digits.
fn has_full_year(date: &NaiveDate) -> bool {
    (1000..=9999).contains(&date.year())
}

/// Year of a standardized date.
pub fn release_year(date: Option<&str>) -> Option<i32> {
    let date = date?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .map(|d| d.year())
}
