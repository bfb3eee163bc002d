//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use gamelink_model::Source;

#[derive(Parser)]
#[command(
    name = "gamelink",
    version,
    about = "Link Metacritic and Steam video game catalogs into one dataset",
    long_about = "Clean scraped Metacritic and Steam catalog data, match games across\n\
                  both sources by fuzzy title and developer similarity, and write a\n\
                  unified, validated dataset."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean one raw scraper file.
    Normalize(NormalizeArgs),

    /// List the titles the Steam scraper should search for.
    Titles(TitlesArgs),

    /// Link two cleaned files into the unified dataset.
    Link(LinkArgs),

    /// Check a unified dataset against acceptance thresholds.
    Validate(ValidateArgs),

    /// Run the whole pipeline: clean, link, write, validate.
    Run(RunArgs),

    /// List the pipeline schedules.
    Schedules,
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Which scraper produced the input.
    #[arg(long = "source", value_enum)]
    pub source: SourceArg,

    /// Raw scraper CSV.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Cleaned output file (default: <source>_cleaned_<timestamp>.csv next to INPUT).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct TitlesArgs {
    /// Raw Metacritic CSV.
    #[arg(value_name = "METACRITIC_RAW")]
    pub input: PathBuf,

    /// Maximum number of titles to emit.
    #[arg(long = "max-titles", default_value_t = gamelink_ingest::DEFAULT_MAX_SEARCH_TITLES)]
    pub max_titles: usize,

    /// Print a JSON array instead of one title per line.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct LinkArgs {
    /// Cleaned Metacritic CSV.
    #[arg(value_name = "MC_CLEANED")]
    pub metacritic: PathBuf,

    /// Cleaned Steam CSV.
    #[arg(value_name = "STEAM_CLEANED")]
    pub steam: PathBuf,

    /// Unified output file.
    #[arg(
        long = "output",
        value_name = "PATH",
        default_value = "data/final/videogames_final.csv"
    )]
    pub output: PathBuf,

    #[command(flatten)]
    pub matching: MatchingArgs,
}

#[derive(Parser)]
pub struct MatchingArgs {
    /// Minimum match score; a pair must score strictly above it.
    #[arg(long = "threshold", value_name = "SCORE", default_value_t = gamelink_link::DEFAULT_MATCH_THRESHOLD)]
    pub threshold: f64,

    /// Scan candidates on a single thread.
    #[arg(long = "sequential")]
    pub sequential: bool,
}

#[derive(Parser)]
pub struct ThresholdArgs {
    /// Minimum number of rows in the unified dataset.
    #[arg(long = "min-rows", value_name = "N", default_value_t = 5)]
    pub min_rows: usize,

    /// Minimum number of matched rows in the unified dataset.
    #[arg(long = "min-matched", value_name = "N", default_value_t = 3)]
    pub min_matched: usize,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Unified dataset CSV.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub thresholds: ThresholdArgs,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Raw Metacritic scraper CSV.
    #[arg(long = "metacritic", value_name = "RAW")]
    pub metacritic: PathBuf,

    /// Raw Steam scraper CSV.
    #[arg(long = "steam", value_name = "RAW")]
    pub steam: PathBuf,

    /// Root directory for processed and final files.
    #[arg(long = "data-dir", value_name = "DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// File name of the unified dataset under <DATA_DIR>/final.
    #[arg(
        long = "output-name",
        value_name = "NAME",
        default_value = gamelink_cli::pipeline::DEFAULT_OUTPUT_NAME
    )]
    pub output_name: String,

    #[command(flatten)]
    pub matching: MatchingArgs,

    #[command(flatten)]
    pub thresholds: ThresholdArgs,
}

/// CLI source choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum SourceArg {
    Metacritic,
    Steam,
}

impl From<SourceArg> for Source {
    fn from(value: SourceArg) -> Self {
        match value {
            SourceArg::Metacritic => Source::Metacritic,
            SourceArg::Steam => Source::Steam,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
