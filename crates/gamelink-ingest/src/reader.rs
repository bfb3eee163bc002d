//! Reading scraper output into raw records.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use gamelink_model::RawRecord;
use tracing::{debug, warn};

use crate::error::{IngestError, Result};

/// Maximum file size for CSV loading (500 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_CSV_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| IngestError::io(path, e))?;
    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }
    Ok(())
}

/// Reject UTF-16 files; a UTF-8 BOM is accepted and stripped later.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| IngestError::io(path, e))?;
    let mut buffer = [0u8; 2];
    let bytes_read = file
        .read(&mut buffer)
        .map_err(|e| IngestError::io(path, e))?;

    if bytes_read == 2 {
        let encoding = match buffer {
            [0xFF, 0xFE] => Some("UTF-16 LE"),
            [0xFE, 0xFF] => Some("UTF-16 BE"),
            _ => None,
        };
        if let Some(encoding) = encoding {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding,
            });
        }
    }
    Ok(())
}

/// Read a scraper CSV into raw records.
///
/// The first row names the fields. Rows shorter than the header produce
/// partial records, and blank cells are left out of the record. Rows that
/// cannot be decoded are skipped with a warning.
pub fn read_raw_records(path: &Path) -> Result<Vec<RawRecord>> {
    check_file_size(path)?;
    validate_encoding(path)?;

    let file = File::open(path).map_err(|e| IngestError::io(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| IngestError::csv(path, &e))?
        .clone();
    if headers.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    let columns: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let name = if index == 0 {
                name.trim_start_matches('\u{feff}')
            } else {
                name
            };
            name.trim().to_string()
        })
        .collect();
    if columns.iter().all(String::is_empty) {
        return Err(IngestError::NoHeaderDetected {
            path: path.to_path_buf(),
        });
    }

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for (index, row) in reader.records().enumerate() {
        match row {
            Ok(row) => records.push(to_raw(&columns, &row)),
            Err(err) => {
                skipped += 1;
                warn!(
                    path = %path.display(),
                    row = index + 2,
                    error = %err,
                    "skipping unreadable row"
                );
            }
        }
    }

    debug!(
        path = %path.display(),
        columns = columns.len(),
        rows = records.len(),
        skipped,
        "read raw records"
    );
    Ok(records)
}

fn to_raw(columns: &[String], row: &csv::StringRecord) -> RawRecord {
    columns
        .iter()
        .zip(row.iter())
        .filter(|(column, value)| !column.is_empty() && !value.trim().is_empty())
        .map(|(column, value)| (column.as_str(), value))
        .collect()
}
