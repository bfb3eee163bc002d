//! Acceptance checks on the unified dataset.

use std::fs;
use std::path::Path;

use gamelink_model::{IS_MATCHED_COLUMN, UnifiedRecord, unified_columns};
use serde::Serialize;
use tracing::{error, info};

use crate::error::{Result, ValidateError};
use crate::issue::Issue;

/// Columns every unified dataset must carry.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "mc_title",
    "mc_metascore",
    "mc_genres",
    "mc_developer",
    "steam_title",
    "steam_price_numeric",
    "steam_tags",
];

/// Acceptance thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationThresholds {
    pub min_rows: usize,
    pub min_matched: usize,
    pub required_columns: Vec<String>,
}

impl Default for ValidationThresholds {
    fn default() -> Self {
        Self {
            min_rows: 5,
            min_matched: 3,
            required_columns: REQUIRED_COLUMNS.iter().map(|c| (*c).to_string()).collect(),
        }
    }
}

/// Outcome of validating one dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub rows: usize,
    pub matched: usize,
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    pub fn passed(&self) -> bool {
        self.issues.is_empty()
    }

    fn log(&self) {
        if self.passed() {
            info!(
                rows = self.rows,
                matched = self.matched,
                "data validation passed"
            );
        } else {
            for issue in &self.issues {
                error!(code = issue.code(), "validation failed: {issue}");
            }
        }
    }
}

/// Validate a unified dataset file.
pub fn validate_file(path: &Path, thresholds: &ValidationThresholds) -> Result<ValidationReport> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(finish(ValidationReport {
                issues: vec![Issue::MissingFile {
                    path: path.to_path_buf(),
                }],
                ..ValidationReport::default()
            }));
        }
        Err(source) => {
            return Err(ValidateError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    if metadata.len() == 0 {
        return Ok(finish(ValidationReport {
            issues: vec![Issue::EmptyFile {
                path: path.to_path_buf(),
            }],
            ..ValidationReport::default()
        }));
    }

    let csv_error = |source: csv::Error| ValidateError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(csv_error)?;
    let columns: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(|c| c.trim().to_string())
        .collect();
    let matched_index = columns.iter().position(|c| c == IS_MATCHED_COLUMN);

    let mut rows = 0;
    let mut matched = 0;
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        rows += 1;
        let is_matched = matched_index
            .and_then(|index| record.get(index))
            .is_some_and(|value| value.trim().eq_ignore_ascii_case("true"));
        if is_matched {
            matched += 1;
        }
    }

    Ok(finish(check(rows, matched, &columns, thresholds)))
}

/// Validate an in-memory unified table.
pub fn validate_records(
    records: &[UnifiedRecord],
    thresholds: &ValidationThresholds,
) -> ValidationReport {
    let matched = records.iter().filter(|record| record.is_matched).count();
    finish(check(records.len(), matched, &unified_columns(), thresholds))
}

fn check(
    rows: usize,
    matched: usize,
    columns: &[String],
    thresholds: &ValidationThresholds,
) -> ValidationReport {
    let mut issues = Vec::new();
    if rows < thresholds.min_rows {
        issues.push(Issue::TooFewRows {
            rows,
            min_rows: thresholds.min_rows,
        });
    }
    if matched < thresholds.min_matched {
        issues.push(Issue::TooFewMatched {
            matched,
            min_matched: thresholds.min_matched,
        });
    }
    let missing: Vec<String> = thresholds
        .required_columns
        .iter()
        .filter(|required| !columns.contains(required))
        .cloned()
        .collect();
    if !missing.is_empty() {
        issues.push(Issue::MissingColumns { columns: missing });
    }
    ValidationReport {
        rows,
        matched,
        issues,
    }
}

fn finish(report: ValidationReport) -> ValidationReport {
    report.log();
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<String> {
        unified_columns()
    }

    #[test]
    fn thresholds_are_inclusive() {
        let thresholds = ValidationThresholds::default();
        let report = check(5, 3, &columns(), &thresholds);
        assert!(report.passed(), "{:?}", report.issues);
    }

    #[test]
    fn every_failed_check_is_reported() {
        let thresholds = ValidationThresholds::default();
        let report = check(4, 2, &["game_title".to_string()], &thresholds);
        assert_eq!(report.issues.len(), 3);
        assert_eq!(
            report.issues[0],
            Issue::TooFewRows {
                rows: 4,
                min_rows: 5
            }
        );
        match &report.issues[2] {
            Issue::MissingColumns { columns } => assert_eq!(columns.len(), 7),
            other => panic!("unexpected issue {other:?}"),
        }
    }

    #[test]
    fn unified_layout_has_required_columns() {
        let columns = columns();
        for required in REQUIRED_COLUMNS {
            assert!(columns.iter().any(|c| c == *required), "{required}");
        }
    }
}
