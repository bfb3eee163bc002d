//! gamelink CLI.

use clap::{ColorChoice, Parser};
use gamelink_cli::logging::{LogConfig, LogFormat, init_logging};
use gamelink_cli::schedule::schedules;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;
mod types;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_all, run_link, run_normalize, run_titles, run_validate};
use crate::summary::{
    print_link_result, print_normalize_summary, print_pipeline_summary, print_schedules,
    print_validation_report,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Normalize(args) => report(run_normalize(&args).map(|result| {
            print_normalize_summary(&result);
            0
        })),
        Command::Titles(args) => report(run_titles(&args).and_then(|titles| {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&titles)?);
            } else {
                for title in titles {
                    println!("{title}");
                }
            }
            Ok(0)
        })),
        Command::Link(args) => report(run_link(&args).map(|result| {
            print_link_result(&result);
            0
        })),
        Command::Validate(args) => report(run_validate(&args).map(|report| {
            print_validation_report(&report);
            if report.passed() { 0 } else { 1 }
        })),
        Command::Run(args) => report(run_all(&args).map(|result| {
            print_pipeline_summary(&result);
            if result.validation.passed() { 0 } else { 1 }
        })),
        Command::Schedules => {
            print_schedules(&schedules());
            0
        }
    };
    std::process::exit(exit_code);
}

fn report(result: anyhow::Result<i32>) -> i32 {
    result.unwrap_or_else(|error| {
        eprintln!("error: {error:#}");
        1
    })
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
