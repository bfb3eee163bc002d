//! Integration tests for record normalization.

use gamelink_model::{CatalogEntry, RawRecord, ReviewRecord, StoreRecord};
use gamelink_normalize::{
    clean_title, normalize_reviews, normalize_store_pages, parse_price, standardize_date,
};
use proptest::prelude::*;

fn renormalize_reviews(records: &[ReviewRecord]) -> Vec<ReviewRecord> {
    let raw: Vec<RawRecord> = records.iter().map(CatalogEntry::to_raw).collect();
    normalize_reviews(&raw)
}

fn renormalize_store(records: &[StoreRecord]) -> Vec<StoreRecord> {
    let raw: Vec<RawRecord> = records.iter().map(CatalogEntry::to_raw).collect();
    normalize_store_pages(&raw)
}

#[test]
fn documented_examples() {
    assert_eq!(clean_title("235. Great Game").as_deref(), Some("Great Game"));
    assert_eq!(clean_title("  Spaced  ").as_deref(), Some("Spaced"));

    assert_eq!(parse_price(Some("Free")), Some(0.0));
    assert_eq!(parse_price(Some("$19.99")), Some(19.99));
    assert_eq!(parse_price(Some("N/A")), None);

    for value in ["Jan 1, 2020", "01/01/2020", "2020"] {
        assert_eq!(standardize_date(Some(value)).as_deref(), Some("2020-01-01"));
    }
    assert_eq!(standardize_date(Some("someday")), None);
}

#[test]
fn normalizing_reviews_twice_is_a_no_op() {
    let raw = vec![
        RawRecord::new()
            .with("title", "1. The Legend of Zelda: Breath of the Wild")
            .with("url", "https://www.metacritic.com/game/zelda-botw")
            .with("metascore", "97")
            .with("user_score", "8.7")
            .with("critic_count", "109 Critic Reviews")
            .with("user_count", "23,455 User Ratings")
            .with("platform", "Switch")
            .with("release_date", "Mar 3, 2017")
            .with("developer", "Nintendo")
            .with("publisher", "Nintendo")
            .with("genres", "Open-World Action"),
        RawRecord::new()
            .with("title", "2. Unknown")
            .with("release_date", "TBA")
            .with("user_score", "tbd"),
    ];
    let once = normalize_reviews(&raw);
    let twice = renormalize_reviews(&once);
    assert_eq!(once, twice);
}

#[test]
fn stacked_prefixes_are_stripped_in_one_pass() {
    let raw = vec![RawRecord::new().with("title", "1. 2. Foo")];
    let once = normalize_reviews(&raw);
    assert_eq!(once[0].title.as_deref(), Some("Foo"));
    assert_eq!(renormalize_reviews(&once), once);
}

#[test]
fn normalizing_store_pages_twice_is_a_no_op() {
    let raw = vec![
        RawRecord::new()
            .with("title", "Hollow Knight")
            .with("app_id", "367520")
            .with("app_url", "https://store.steampowered.com/app/367520")
            .with("search_term", "Hollow Knight")
            .with("price", "$14.99")
            .with("discount", "0%")
            .with("review_summary", "Overwhelmingly Positive")
            .with("review_count", "(319,552)")
            .with("release_date", "24 Feb, 2017")
            .with("developer", "Team Cherry")
            .with("tags", "Metroidvania, Souls-like"),
    ];
    let once = normalize_store_pages(&raw);
    let twice = renormalize_store(&once);
    assert_eq!(once, twice);
}

proptest! {
    #[test]
    fn title_cleanup_is_idempotent(
        prefix in "([0-9]{1,3}\\. ?){0,2}",
        title in "[A-Za-z][A-Za-z0-9:' ]{0,30}",
        padding in " {0,3}",
    ) {
        let raw = format!("{padding}{prefix}{title}{padding}");
        let once = clean_title(&raw);
        let twice = once.as_deref().and_then(clean_title);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn standardized_dates_are_fixed_points(
        year in 1950i32..2040,
        month in 1u32..=12,
        day in 1u32..=28,
    ) {
        let us = format!("{month:02}/{day:02}/{year}");
        let iso = standardize_date(Some(&us));
        let expected = format!("{year}-{month:02}-{day:02}");
        prop_assert_eq!(iso.as_deref(), Some(expected.as_str()));
        prop_assert_eq!(standardize_date(iso.as_deref()), iso);
    }
}
