//! Reading cleaned, typed catalog files.

use std::fs::File;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Read a cleaned catalog file back into typed records.
///
/// Empty cells deserialize as `None`. Unlike raw scraper files, any row that
/// does not fit the record type fails the whole read.
pub fn read_cleaned<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path).map_err(|e| IngestError::io(path, e))?;
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(file);
    let records = reader
        .deserialize()
        .collect::<std::result::Result<Vec<T>, _>>()
        .map_err(|e| IngestError::csv(path, &e))?;
    debug!(path = %path.display(), rows = records.len(), "read cleaned records");
    Ok(records)
}
