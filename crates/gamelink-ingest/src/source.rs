//! Batches of raw records produced by a scraper.

use std::path::{Path, PathBuf};

use gamelink_model::{RawRecord, Source};
use tracing::info;

use crate::error::Result;
use crate::reader::read_raw_records;

/// Something that yields a batch of raw records for one source.
pub trait RecordSource {
    fn source(&self) -> Source;

    fn fetch(&self) -> Result<Vec<RawRecord>>;
}

/// Scraper output already persisted as CSV.
#[derive(Debug, Clone)]
pub struct CsvRecordSource {
    source: Source,
    path: PathBuf,
}

impl CsvRecordSource {
    pub fn new(source: Source, path: impl Into<PathBuf>) -> Self {
        Self {
            source,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for CsvRecordSource {
    fn source(&self) -> Source {
        self.source
    }

    fn fetch(&self) -> Result<Vec<RawRecord>> {
        let records = read_raw_records(&self.path)?;
        info!(
            source = %self.source,
            path = %self.path.display(),
            records = records.len(),
            "loaded raw records"
        );
        Ok(records)
    }
}
