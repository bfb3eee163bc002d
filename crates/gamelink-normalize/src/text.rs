//! Text and title cleanup.

use std::sync::LazyLock;

use regex::Regex;

/// Leading list numbering such as `"235. "` on scraped ranking pages,
/// repeated when a ranked title was scraped from an already ranked list.
static ENUMERATION_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\d+\.\s*)+").expect("Invalid enumeration prefix regex"));

/// Token scrapers write for a field they could not find.
const NOT_AVAILABLE: &str = "N/A";

/// True for blank text and the scraper's `N/A` placeholder.
pub fn is_missing(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NOT_AVAILABLE)
}

/// Trimmed text, or `None` for missing values.
pub fn text_field(value: Option<&str>) -> Option<String> {
    let value = value?;
    if is_missing(value) {
        return None;
    }
    Some(value.trim().to_string())
}

/// Strip leading enumeration prefixes and surrounding whitespace.
///
/// Returns `None` when nothing is left.
pub fn clean_title(value: &str) -> Option<String> {
    let trimmed = value.trim();
    let stripped = ENUMERATION_PREFIX.replace(trimmed, "");
    let cleaned = stripped.trim();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}
