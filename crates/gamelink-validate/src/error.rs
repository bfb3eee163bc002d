use std::path::PathBuf;
use thiserror::Error;

/// I/O failures while reading a dataset. Failed checks are [`Issue`](crate::Issue)s instead.
#[derive(Debug, Error)]
pub enum ValidateError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub type Result<T> = std::result::Result<T, ValidateError>;
