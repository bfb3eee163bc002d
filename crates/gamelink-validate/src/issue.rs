//! Validation issue types.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// A failed acceptance check; each variant carries only its needed data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Issue {
    /// Dataset file does not exist.
    MissingFile { path: PathBuf },
    /// Dataset file has zero bytes.
    EmptyFile { path: PathBuf },
    /// Fewer rows than required.
    TooFewRows { rows: usize, min_rows: usize },
    /// Fewer matched rows than required.
    TooFewMatched { matched: usize, min_matched: usize },
    /// Required columns absent from the header.
    MissingColumns { columns: Vec<String> },
}

impl Issue {
    /// Short stable identifier, used in reports.
    pub fn code(&self) -> &'static str {
        match self {
            Issue::MissingFile { .. } => "missing_file",
            Issue::EmptyFile { .. } => "empty_file",
            Issue::TooFewRows { .. } => "too_few_rows",
            Issue::TooFewMatched { .. } => "too_few_matched",
            Issue::MissingColumns { .. } => "missing_columns",
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::MissingFile { path } => {
                write!(f, "final file {} doesn't exist", path.display())
            }
            Issue::EmptyFile { path } => write!(f, "final file {} is empty", path.display()),
            Issue::TooFewRows { rows, min_rows } => write!(
                f,
                "final dataset has only {rows} rows, expected at least {min_rows}"
            ),
            Issue::TooFewMatched {
                matched,
                min_matched,
            } => write!(
                f,
                "only {matched} games were matched across both sources, expected at least {min_matched}"
            ),
            Issue::MissingColumns { columns } => {
                write!(f, "missing required columns: {}", columns.join(", "))
            }
        }
    }
}
