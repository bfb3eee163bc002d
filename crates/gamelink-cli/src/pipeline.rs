//! Catalog linkage pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: Read raw scraper output for both sources
//! 2. **Clean**: Deduplicate and normalize, write timestamped cleaned files
//! 3. **Link**: Fuzzy-match Metacritic records to Steam records
//! 4. **Output**: Write the unified dataset
//! 5. **Validate**: Check the written dataset against acceptance thresholds
//!
//! Each stage takes the output of the previous stage and returns typed results.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use tracing::{info, info_span};

use gamelink_ingest::{CsvRecordSource, RecordSource};
use gamelink_link::{LinkOptions, LinkOutcome, LinkSummary, Linker};
use gamelink_model::{CatalogEntry, RawRecord, ReviewRecord, Source, StoreRecord};
use gamelink_normalize::{NormalizedBatch, normalize_reviews, normalize_store_pages};
use gamelink_output::{stage_file_name, write_cleaned, write_unified};
use gamelink_validate::{ValidationReport, ValidationThresholds, validate_file};

/// File name of the unified dataset under `<data>/final`.
pub const DEFAULT_OUTPUT_NAME: &str = "videogames_final.csv";

/// Inputs and knobs for a full pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub metacritic_raw: PathBuf,
    pub steam_raw: PathBuf,
    /// Root holding `processed/` and `final/`.
    pub data_dir: PathBuf,
    pub output_name: String,
    pub link: LinkOptions,
    pub thresholds: ValidationThresholds,
}

impl PipelineConfig {
    pub fn new(metacritic_raw: impl Into<PathBuf>, steam_raw: impl Into<PathBuf>) -> Self {
        Self {
            metacritic_raw: metacritic_raw.into(),
            steam_raw: steam_raw.into(),
            data_dir: PathBuf::from("data"),
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
            link: LinkOptions::default(),
            thresholds: ValidationThresholds::default(),
        }
    }

    pub fn processed_dir(&self) -> PathBuf {
        self.data_dir.join("processed")
    }

    pub fn final_path(&self) -> PathBuf {
        self.data_dir.join("final").join(&self.output_name)
    }
}

/// Counts and output of the clean stage for one source.
#[derive(Debug, Clone, Serialize)]
pub struct SourceStage {
    pub source: Source,
    pub raw_records: usize,
    pub records: usize,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize)]
pub struct PipelineResult {
    pub metacritic: SourceStage,
    pub steam: SourceStage,
    pub final_path: PathBuf,
    pub link: LinkSummary,
    pub validation: ValidationReport,
}

/// Read the raw scraper file of one source.
pub fn ingest(source: Source, path: &Path) -> Result<Vec<RawRecord>> {
    let _guard = info_span!("ingest", source = %source).entered();
    CsvRecordSource::new(source, path)
        .fetch()
        .with_context(|| format!("read {source} data from {}", path.display()))
}

/// File name of a cleaned stage file.
pub fn cleaned_file_name(source: Source, now: NaiveDateTime) -> String {
    stage_file_name(&format!("{}_cleaned", source.as_str()), now)
}

/// Write a normalized batch as a cleaned file.
pub fn write_batch(batch: &NormalizedBatch, path: &Path) -> Result<()> {
    let written = match batch {
        NormalizedBatch::Reviews(records) => write_cleaned(path, records),
        NormalizedBatch::StorePages(records) => write_cleaned(path, records),
    };
    written.with_context(|| {
        format!(
            "write cleaned {} data to {}",
            batch.source(),
            path.display()
        )
    })
}

fn clean<T: CatalogEntry>(
    raw: &[RawRecord],
    normalize: fn(&[RawRecord]) -> Vec<T>,
    processed_dir: &Path,
    now: NaiveDateTime,
) -> Result<(Vec<T>, SourceStage)> {
    let source = T::SOURCE;
    let _guard = info_span!("clean", source = %source).entered();
    let start = Instant::now();
    let records = normalize(raw);
    let path = processed_dir.join(cleaned_file_name(source, now));
    write_cleaned(&path, &records)
        .with_context(|| format!("write cleaned {source} data to {}", path.display()))?;
    info!(
        raw_records = raw.len(),
        records = records.len(),
        path = %path.display(),
        duration_ms = start.elapsed().as_millis(),
        "cleaning complete"
    );
    let stage = SourceStage {
        source,
        raw_records: raw.len(),
        records: records.len(),
        path,
    };
    Ok((records, stage))
}

/// Link cleaned catalogs.
pub fn link(reviews: &[ReviewRecord], store: &[StoreRecord], options: LinkOptions) -> LinkOutcome {
    Linker::new(options).link_with_summary(reviews, store)
}

/// Run every stage end to end.
///
/// A dataset that fails validation is not an error here; inspect
/// [`ValidationReport::passed`] on the result.
pub fn run_pipeline(config: &PipelineConfig) -> Result<PipelineResult> {
    let start = Instant::now();
    let now = Local::now().naive_local();
    let processed_dir = config.processed_dir();

    let metacritic_raw = ingest(Source::Metacritic, &config.metacritic_raw)?;
    let steam_raw = ingest(Source::Steam, &config.steam_raw)?;

    let (reviews, metacritic) = clean(&metacritic_raw, normalize_reviews, &processed_dir, now)?;
    let (store, steam) = clean(&steam_raw, normalize_store_pages, &processed_dir, now)?;

    let outcome = link(&reviews, &store, config.link);

    let final_path = config.final_path();
    info_span!("output").in_scope(|| -> Result<()> {
        write_unified(&final_path, &outcome.records)
            .with_context(|| format!("write unified data to {}", final_path.display()))?;
        info!(
            rows = outcome.records.len(),
            path = %final_path.display(),
            "unified dataset written"
        );
        Ok(())
    })?;

    let validation = info_span!("validate").in_scope(|| {
        validate_file(&final_path, &config.thresholds)
            .with_context(|| format!("validate {}", final_path.display()))
    })?;

    info!(
        matched = outcome.summary.matched,
        rows = outcome.records.len(),
        passed = validation.passed(),
        duration_ms = start.elapsed().as_millis(),
        "pipeline complete"
    );

    Ok(PipelineResult {
        metacritic,
        steam,
        final_path,
        link: outcome.summary,
        validation,
    })
}
