//! Acceptance checks for the unified dataset.
//!
//! A dataset passes when it has enough rows, enough matched rows, and every
//! required column. Failed checks are collected as [`Issue`]s rather than
//! returned as errors; only I/O problems are errors.

mod error;
mod issue;
mod validate;

pub use error::{Result, ValidateError};
pub use issue::Issue;
pub use validate::{
    REQUIRED_COLUMNS, ValidationReport, ValidationThresholds, validate_file, validate_records,
};
