//! Search targets for the storefront scraper.

use std::collections::HashSet;

use gamelink_model::RawRecord;
use gamelink_normalize::clean_title;

/// Cap on titles handed to the storefront scraper per run.
pub const DEFAULT_MAX_SEARCH_TITLES: usize = 240;

/// Unique cleaned titles in first-seen order, at most `max_titles`.
pub fn extract_search_titles(records: &[RawRecord], max_titles: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter_map(|record| clean_title(record.get("title")?))
        .filter(|title| seen.insert(title.clone()))
        .take(max_titles)
        .collect()
}
