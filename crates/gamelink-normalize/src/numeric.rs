//! Numeric field parsing: scores, counts, prices and review summaries.

use std::sync::LazyLock;

use regex::Regex;

use crate::text::is_missing;

/// First run of digits, commas and periods in a price string.
static PRICE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\d.,]+").expect("Invalid price regex"));

/// Price labels for games that cost nothing.
const FREE_PRICE_LABELS: &[&str] = &["Free", "Free to Play"];

/// Steam review summary label -> representative percentile.
const REVIEW_SUMMARY_SCORES: &[(&str, f64)] = &[
    ("Overwhelmingly Positive", 95.0),
    ("Very Positive", 85.0),
    ("Positive", 75.0),
    ("Mostly Positive", 65.0),
    ("Mixed", 50.0),
    ("Mostly Negative", 35.0),
    ("Negative", 25.0),
    ("Very Negative", 15.0),
    ("Overwhelmingly Negative", 5.0),
];

fn parse_finite(digits: &str) -> Option<f64> {
    digits.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Metascore: the trimmed text must be a number on its own.
pub fn parse_metascore(value: Option<&str>) -> Option<f64> {
    let value = value?.trim();
    if is_missing(value) {
        return None;
    }
    parse_finite(value)
}

/// Counts such as `"1,234 Ratings"`: every non-digit is dropped.
pub fn parse_count(value: Option<&str>) -> Option<f64> {
    let value = value?;
    if is_missing(value) {
        return None;
    }
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    parse_finite(&digits)
}

/// Decimal scores such as a user score of `"7.9"`; `tbd` means not rated yet.
pub fn parse_decimal(value: Option<&str>) -> Option<f64> {
    let value = value?;
    if is_missing(value) || value.trim().eq_ignore_ascii_case("tbd") {
        return None;
    }
    let digits: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if digits.is_empty() {
        return None;
    }
    parse_finite(&digits)
}

/// Store price in the listing currency.
///
/// Free labels are `0.0`; otherwise the first numeric run is parsed with
/// thousands separators removed.
pub fn parse_price(value: Option<&str>) -> Option<f64> {
    let value = value?.trim();
    if is_missing(value) {
        return None;
    }
    if FREE_PRICE_LABELS
        .iter()
        .any(|label| value.eq_ignore_ascii_case(label))
    {
        return Some(0.0);
    }
    let number = PRICE_NUMBER.find(value)?;
    let digits: String = number
        .as_str()
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    parse_finite(&digits)
}

/// Discount percentage; `"0%"` is an explicit zero.
pub fn parse_discount(value: Option<&str>) -> Option<f64> {
    let value = value?.trim();
    if is_missing(value) {
        return None;
    }
    if value == "0%" {
        return Some(0.0);
    }
    parse_count(Some(value))
}

/// Approximate numeric score for a Steam review summary label.
pub fn review_summary_score(value: Option<&str>) -> Option<f64> {
    let label = value?.trim();
    REVIEW_SUMMARY_SCORES
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, score)| *score)
}
