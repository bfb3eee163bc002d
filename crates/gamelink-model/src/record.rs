//! Normalized, typed records for each catalog.
//!
//! Field order in these structs is the column order of the cleaned CSV files
//! and of each source's block in the unified table.

use serde::{Deserialize, Serialize};

use crate::raw::RawRecord;
use crate::source::Source;

/// Common view over a normalized record, used by the linker and writers.
pub trait CatalogEntry {
    /// Catalog the record came from.
    const SOURCE: Source;
    /// Normalized field names, in column order.
    const FIELDS: &'static [&'static str];

    fn title(&self) -> Option<&str>;

    fn title_mut(&mut self) -> &mut Option<String>;

    fn developer(&self) -> Option<&str>;

    /// Quality metric blended into the combined score of a matched pair.
    fn quality_score(&self) -> Option<f64>;

    /// Display values for every field in [`Self::FIELDS`] order.
    fn field_values(&self) -> Vec<Option<String>>;

    /// Projects the record back onto the raw fields the scraper produces.
    fn to_raw(&self) -> RawRecord;
}

/// Metacritic game page, normalized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub title: Option<String>,
    pub url: Option<String>,
    pub metascore: Option<f64>,
    pub user_score: Option<f64>,
    pub critic_count: Option<f64>,
    pub user_count: Option<f64>,
    pub platform: Option<String>,
    /// ISO 8601 `YYYY-MM-DD`.
    pub release_date: Option<String>,
    pub release_year: Option<i32>,
    pub developer: Option<String>,
    pub publisher: Option<String>,
    /// Comma-joined genre list.
    pub genres: Option<String>,
}

/// Steam store page, normalized.
///
/// The raw `price`, `discount` and `review_count` text is kept next to its
/// parsed counterpart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreRecord {
    pub title: Option<String>,
    pub app_id: Option<String>,
    pub app_url: Option<String>,
    pub search_term: Option<String>,
    pub price: Option<String>,
    pub price_numeric: Option<f64>,
    pub discount: Option<String>,
    pub discount_percent: Option<f64>,
    pub review_summary: Option<String>,
    pub review_count: Option<String>,
    pub review_count_numeric: Option<f64>,
    pub review_score_approx: Option<f64>,
    /// ISO 8601 `YYYY-MM-DD`.
    pub release_date: Option<String>,
    pub release_year: Option<i32>,
    pub developer: Option<String>,
    pub publisher: Option<String>,
    /// Comma-joined user tag list.
    pub tags: Option<String>,
}

/// Render a number without a trailing `.0` for whole values.
pub fn format_number(value: f64) -> String {
    value.to_string()
}

fn number(value: Option<f64>) -> Option<String> {
    value.map(format_number)
}

fn push_text(raw: &mut RawRecord, name: &str, value: Option<&String>) {
    if let Some(value) = value {
        raw.insert(name, value.as_str());
    }
}

fn push_number(raw: &mut RawRecord, name: &str, value: Option<f64>) {
    if let Some(value) = value {
        raw.insert(name, format_number(value));
    }
}

impl CatalogEntry for ReviewRecord {
    const SOURCE: Source = Source::Metacritic;
    const FIELDS: &'static [&'static str] = &[
        "title",
        "url",
        "metascore",
        "user_score",
        "critic_count",
        "user_count",
        "platform",
        "release_date",
        "release_year",
        "developer",
        "publisher",
        "genres",
    ];

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn title_mut(&mut self) -> &mut Option<String> {
        &mut self.title
    }

    fn developer(&self) -> Option<&str> {
        self.developer.as_deref()
    }

    fn quality_score(&self) -> Option<f64> {
        self.metascore
    }

    fn field_values(&self) -> Vec<Option<String>> {
        vec![
            self.title.clone(),
            self.url.clone(),
            number(self.metascore),
            number(self.user_score),
            number(self.critic_count),
            number(self.user_count),
            self.platform.clone(),
            self.release_date.clone(),
            self.release_year.map(|y| y.to_string()),
            self.developer.clone(),
            self.publisher.clone(),
            self.genres.clone(),
        ]
    }

    fn to_raw(&self) -> RawRecord {
        let mut raw = RawRecord::new();
        push_text(&mut raw, "title", self.title.as_ref());
        push_text(&mut raw, "url", self.url.as_ref());
        push_number(&mut raw, "metascore", self.metascore);
        push_number(&mut raw, "user_score", self.user_score);
        push_number(&mut raw, "critic_count", self.critic_count);
        push_number(&mut raw, "user_count", self.user_count);
        push_text(&mut raw, "platform", self.platform.as_ref());
        push_text(&mut raw, "release_date", self.release_date.as_ref());
        push_text(&mut raw, "developer", self.developer.as_ref());
        push_text(&mut raw, "publisher", self.publisher.as_ref());
        push_text(&mut raw, "genres", self.genres.as_ref());
        raw
    }
}

impl CatalogEntry for StoreRecord {
    const SOURCE: Source = Source::Steam;
    const FIELDS: &'static [&'static str] = &[
        "title",
        "app_id",
        "app_url",
        "search_term",
        "price",
        "price_numeric",
        "discount",
        "discount_percent",
        "review_summary",
        "review_count",
        "review_count_numeric",
        "review_score_approx",
        "release_date",
        "release_year",
        "developer",
        "publisher",
        "tags",
    ];

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn title_mut(&mut self) -> &mut Option<String> {
        &mut self.title
    }

    fn developer(&self) -> Option<&str> {
        self.developer.as_deref()
    }

    fn quality_score(&self) -> Option<f64> {
        self.review_score_approx
    }

    fn field_values(&self) -> Vec<Option<String>> {
        vec![
            self.title.clone(),
            self.app_id.clone(),
            self.app_url.clone(),
            self.search_term.clone(),
            self.price.clone(),
            number(self.price_numeric),
            self.discount.clone(),
            number(self.discount_percent),
            self.review_summary.clone(),
            self.review_count.clone(),
            number(self.review_count_numeric),
            number(self.review_score_approx),
            self.release_date.clone(),
            self.release_year.map(|y| y.to_string()),
            self.developer.clone(),
            self.publisher.clone(),
            self.tags.clone(),
        ]
    }

    fn to_raw(&self) -> RawRecord {
        let mut raw = RawRecord::new();
        push_text(&mut raw, "title", self.title.as_ref());
        push_text(&mut raw, "app_id", self.app_id.as_ref());
        push_text(&mut raw, "app_url", self.app_url.as_ref());
        push_text(&mut raw, "search_term", self.search_term.as_ref());
        push_text(&mut raw, "price", self.price.as_ref());
        push_text(&mut raw, "discount", self.discount.as_ref());
        push_text(&mut raw, "review_summary", self.review_summary.as_ref());
        push_text(&mut raw, "review_count", self.review_count.as_ref());
        push_text(&mut raw, "release_date", self.release_date.as_ref());
        push_text(&mut raw, "developer", self.developer.as_ref());
        push_text(&mut raw, "publisher", self.publisher.as_ref());
        push_text(&mut raw, "tags", self.tags.as_ref());
        raw
    }
}
