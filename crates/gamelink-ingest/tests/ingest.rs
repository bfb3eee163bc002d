//! Integration tests for catalog ingestion.

use std::fs;

use gamelink_ingest::{CsvRecordSource, IngestError, RecordSource, extract_search_titles};
use gamelink_model::Source;
use gamelink_normalize::normalize_reviews;
use tempfile::TempDir;

const METACRITIC_RAW: &str = "\
title,url,metascore,user_score,critic_count,release_date,developer,genres
1. Elden Ring,/game/elden-ring,96,7.9,98 Critic Reviews,\"Feb 25, 2022\",FromSoftware,Action RPG
2. Hades,/game/hades,93,tbd,,2020,Supergiant Games,Roguelike
1. Elden Ring,/game/elden-ring,96,7.9,98 Critic Reviews,\"Feb 25, 2022\",FromSoftware,Action RPG
3. Unfinished
";

#[test]
fn csv_source_feeds_normalization() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("metacritic_raw.csv");
    fs::write(&path, METACRITIC_RAW).unwrap();

    let source = CsvRecordSource::new(Source::Metacritic, &path);
    assert_eq!(source.source(), Source::Metacritic);
    let raw = source.fetch().unwrap();
    assert_eq!(raw.len(), 4);

    let titles = extract_search_titles(&raw, 240);
    assert_eq!(titles, vec!["Elden Ring", "Hades", "Unfinished"]);

    let reviews = normalize_reviews(&raw);
    assert_eq!(reviews.len(), 3);
    assert_eq!(reviews[0].release_date.as_deref(), Some("2022-02-25"));
    assert_eq!(reviews[0].critic_count, Some(98.0));
    assert_eq!(reviews[1].user_score, None);
    assert_eq!(reviews[1].release_date.as_deref(), Some("2020-01-01"));
    assert_eq!(reviews[2].title.as_deref(), Some("Unfinished"));
    assert_eq!(reviews[2].metascore, None);
}

#[test]
fn missing_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let source = CsvRecordSource::new(Source::Steam, dir.path().join("absent.csv"));
    let err = source.fetch().unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
    assert!(err.to_string().contains("absent.csv"));
}
