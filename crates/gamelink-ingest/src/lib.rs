//! Catalog file ingestion.
//!
//! Raw scraper output arrives as loosely-structured CSV: fields may be
//! missing, rows may be short, and a few rows may be garbage. This crate
//! turns those files into [`RawRecord`](gamelink_model::RawRecord)s, reads
//! cleaned files back into typed records, and derives the title list the
//! storefront scraper searches for.
//!
//! # Example
//!
//! ```ignore
//! use gamelink_ingest::{CsvRecordSource, RecordSource, extract_search_titles};
//! use gamelink_model::Source;
//!
//! let source = CsvRecordSource::new(Source::Metacritic, "data/raw/metacritic.csv");
//! let raw = source.fetch()?;
//! let titles = extract_search_titles(&raw, 240);
//! ```

mod cleaned;
mod error;
mod reader;
mod source;
mod titles;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use cleaned::read_cleaned;
pub use reader::{
    MAX_CSV_FILE_SIZE, check_file_size, check_file_size_with_limit, read_raw_records,
    validate_encoding,
};

// === Sources ===
pub use source::{CsvRecordSource, RecordSource};
pub use titles::{DEFAULT_MAX_SEARCH_TITLES, extract_search_titles};
