use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use tracing::info;

use gamelink_cli::pipeline::{
    PipelineConfig, PipelineResult, cleaned_file_name, ingest, link, run_pipeline, write_batch,
};
use gamelink_ingest::{extract_search_titles, read_cleaned};
use gamelink_link::LinkOptions;
use gamelink_model::{ReviewRecord, Source, StoreRecord};
use gamelink_normalize::normalize;
use gamelink_output::write_unified;
use gamelink_validate::{ValidationReport, ValidationThresholds, validate_file};

use crate::cli::{
    LinkArgs, MatchingArgs, NormalizeArgs, RunArgs, ThresholdArgs, TitlesArgs, ValidateArgs,
};
use crate::types::{LinkResult, NormalizeResult};

pub fn run_normalize(args: &NormalizeArgs) -> Result<NormalizeResult> {
    let source = Source::from(args.source);
    let raw = ingest(source, &args.input)?;
    let batch = normalize(source, &raw);
    let output = match &args.output {
        Some(path) => path.clone(),
        None => args
            .input
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(cleaned_file_name(source, Local::now().naive_local())),
    };
    write_batch(&batch, &output)?;
    info!(source = %source, records = batch.len(), path = %output.display(), "cleaned file written");
    Ok(NormalizeResult {
        source,
        input: args.input.clone(),
        output,
        raw_records: raw.len(),
        records: batch.len(),
    })
}

pub fn run_titles(args: &TitlesArgs) -> Result<Vec<String>> {
    let raw = ingest(Source::Metacritic, &args.input)?;
    let titles = extract_search_titles(&raw, args.max_titles);
    info!(titles = titles.len(), "extracted search titles");
    Ok(titles)
}

pub fn run_link(args: &LinkArgs) -> Result<LinkResult> {
    let reviews: Vec<ReviewRecord> = read_cleaned(&args.metacritic)
        .with_context(|| format!("read cleaned Metacritic data {}", args.metacritic.display()))?;
    let store: Vec<StoreRecord> = read_cleaned(&args.steam)
        .with_context(|| format!("read cleaned Steam data {}", args.steam.display()))?;
    let outcome = link(&reviews, &store, link_options(&args.matching));
    write_unified(&args.output, &outcome.records)
        .with_context(|| format!("write unified data to {}", args.output.display()))?;
    Ok(LinkResult {
        output: args.output.clone(),
        summary: outcome.summary,
    })
}

pub fn run_validate(args: &ValidateArgs) -> Result<ValidationReport> {
    validate_file(&args.file, &thresholds(&args.thresholds))
        .with_context(|| format!("validate {}", args.file.display()))
}

pub fn run_all(args: &RunArgs) -> Result<PipelineResult> {
    let config = PipelineConfig {
        data_dir: args.data_dir.clone(),
        output_name: args.output_name.clone(),
        link: link_options(&args.matching),
        thresholds: thresholds(&args.thresholds),
        ..PipelineConfig::new(&args.metacritic, &args.steam)
    };
    run_pipeline(&config)
}

fn link_options(args: &MatchingArgs) -> LinkOptions {
    LinkOptions::default()
        .with_threshold(args.threshold)
        .with_parallel(!args.sequential)
}

fn thresholds(args: &ThresholdArgs) -> ValidationThresholds {
    ValidationThresholds {
        min_rows: args.min_rows,
        min_matched: args.min_matched,
        ..ValidationThresholds::default()
    }
}
