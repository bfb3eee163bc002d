//! Record-level normalization for each source.

use gamelink_model::{RawRecord, ReviewRecord, Source, StoreRecord};
use tracing::{debug, trace};

use crate::datetime::{release_year, standardize_date};
use crate::dedupe::dedupe_by_key;
use crate::numeric::{
    parse_count, parse_decimal, parse_discount, parse_metascore, parse_price,
    review_summary_score,
};
use crate::text::{clean_title, text_field};

/// Normalized records of a single source.
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizedBatch {
    Reviews(Vec<ReviewRecord>),
    StorePages(Vec<StoreRecord>),
}

impl NormalizedBatch {
    pub fn source(&self) -> Source {
        match self {
            Self::Reviews(_) => Source::Metacritic,
            Self::StorePages(_) => Source::Steam,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Reviews(records) => records.len(),
            Self::StorePages(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Normalize a batch of raw records scraped from `source`.
pub fn normalize(source: Source, raw: &[RawRecord]) -> NormalizedBatch {
    match source {
        Source::Metacritic => NormalizedBatch::Reviews(normalize_reviews(raw)),
        Source::Steam => NormalizedBatch::StorePages(normalize_store_pages(raw)),
    }
}

/// Deduplicate on (title, url) and normalize Metacritic records.
pub fn normalize_reviews(raw: &[RawRecord]) -> Vec<ReviewRecord> {
    let (unique, duplicates) = dedupe_by_key(raw, Source::Metacritic.dedupe_key_fields());
    let records: Vec<ReviewRecord> = unique.into_iter().map(normalize_review).collect();
    debug!(
        source = %Source::Metacritic,
        input = raw.len(),
        duplicates,
        output = records.len(),
        "normalized records"
    );
    records
}

/// Deduplicate on `app_id` and normalize Steam records.
pub fn normalize_store_pages(raw: &[RawRecord]) -> Vec<StoreRecord> {
    let (unique, duplicates) = dedupe_by_key(raw, Source::Steam.dedupe_key_fields());
    let records: Vec<StoreRecord> = unique.into_iter().map(normalize_store_page).collect();
    debug!(
        source = %Source::Steam,
        input = raw.len(),
        duplicates,
        output = records.len(),
        "normalized records"
    );
    records
}

fn title(raw: &RawRecord) -> Option<String> {
    let title = text_field(raw.get("title"))?;
    clean_title(&title)
}

fn normalize_review(raw: &RawRecord) -> ReviewRecord {
    let release_date = standardize_date(raw.get("release_date"));
    let record = ReviewRecord {
        title: title(raw),
        url: text_field(raw.get("url")),
        metascore: parse_metascore(raw.get("metascore")),
        user_score: parse_decimal(raw.get("user_score")),
        critic_count: parse_count(raw.get("critic_count")),
        user_count: parse_count(raw.get("user_count")),
        platform: text_field(raw.get("platform")),
        release_year: release_year(release_date.as_deref()),
        release_date,
        developer: text_field(raw.get("developer")),
        publisher: text_field(raw.get("publisher")),
        genres: text_field(raw.get("genres")),
    };
    if record.release_date.is_none() && raw.get("release_date").is_some() {
        trace!(value = ?raw.get("release_date"), "unparseable release date");
    }
    record
}

fn normalize_store_page(raw: &RawRecord) -> StoreRecord {
    let release_date = standardize_date(raw.get("release_date"));
    let review_summary = text_field(raw.get("review_summary"));
    StoreRecord {
        title: title(raw),
        app_id: text_field(raw.get("app_id")),
        app_url: text_field(raw.get("app_url")),
        search_term: text_field(raw.get("search_term")),
        price: text_field(raw.get("price")),
        price_numeric: parse_price(raw.get("price")),
        discount: text_field(raw.get("discount")),
        discount_percent: parse_discount(raw.get("discount")),
        review_score_approx: review_summary_score(review_summary.as_deref()),
        review_summary,
        review_count: text_field(raw.get("review_count")),
        review_count_numeric: parse_count(raw.get("review_count")),
        release_year: release_year(release_date.as_deref()),
        release_date,
        developer: text_field(raw.get("developer")),
        publisher: text_field(raw.get("publisher")),
        tags: text_field(raw.get("tags")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_fields_are_typed() {
        let raw = RawRecord::new()
            .with("title", "235. Great Game")
            .with("url", "https://www.metacritic.com/game/great-game")
            .with("metascore", "88")
            .with("user_score", "7.9")
            .with("critic_count", "45 Critic Reviews")
            .with("user_count", "1,204")
            .with("release_date", "Jan 1, 2020")
            .with("developer", "N/A")
            .with("genres", "Action, RPG");
        let records = normalize_reviews(&[raw]);
        let record = &records[0];
        assert_eq!(record.title.as_deref(), Some("Great Game"));
        assert_eq!(record.metascore, Some(88.0));
        assert_eq!(record.user_score, Some(7.9));
        assert_eq!(record.critic_count, Some(45.0));
        assert_eq!(record.user_count, Some(1204.0));
        assert_eq!(record.release_date.as_deref(), Some("2020-01-01"));
        assert_eq!(record.release_year, Some(2020));
        assert_eq!(record.developer, None);
        assert_eq!(record.genres.as_deref(), Some("Action, RPG"));
    }

    #[test]
    fn store_fields_are_typed() {
        let raw = RawRecord::new()
            .with("title", "Hades")
            .with("app_id", "1145360")
            .with("price", "$24.99")
            .with("discount", "-50%")
            .with("review_summary", "Overwhelmingly Positive")
            .with("review_count", "(254,101)")
            .with("release_date", "17 Sep, 2020");
        let records = normalize_store_pages(&[raw]);
        let record = &records[0];
        assert_eq!(record.price.as_deref(), Some("$24.99"));
        assert_eq!(record.price_numeric, Some(24.99));
        assert_eq!(record.discount_percent, Some(50.0));
        assert_eq!(record.review_score_approx, Some(95.0));
        assert_eq!(record.review_count_numeric, Some(254_101.0));
        assert_eq!(record.release_date.as_deref(), Some("2020-09-17"));
        assert_eq!(record.release_year, Some(2020));
    }

    #[test]
    fn partial_record_is_not_an_error() {
        let raw = RawRecord::new().with("search_term", "Unknown Game");
        let records = normalize_store_pages(&[raw]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, None);
        assert_eq!(records[0].search_term.as_deref(), Some("Unknown Game"));
    }

    #[test]
    fn duplicates_dropped_per_source_key() {
        let raw = vec![
            RawRecord::new().with("title", "Doom").with("url", "/game/doom"),
            RawRecord::new().with("title", "Doom").with("url", "/game/doom"),
        ];
        assert_eq!(normalize_reviews(&raw).len(), 1);

        let store = vec![
            RawRecord::new().with("title", "Doom").with("app_id", "2280"),
            RawRecord::new().with("title", "DOOM").with("app_id", "2280"),
        ];
        assert_eq!(normalize_store_pages(&store).len(), 1);
    }
}
