//! CSV writers.

use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use gamelink_model::{CatalogEntry, UnifiedRecord, unified_columns};
use tracing::debug;

use crate::error::{OutputError, Result};

/// Ensure a parent directory exists for a file path.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// `<prefix>_<YYYYmmdd_HHMMSS>.csv`
pub fn stage_file_name(prefix: &str, now: NaiveDateTime) -> String {
    format!("{prefix}_{}.csv", now.format("%Y%m%d_%H%M%S"))
}

/// Write cleaned records of one source, header first, fields in record order.
pub fn write_cleaned<T: CatalogEntry>(path: &Path, records: &[T]) -> Result<()> {
    let rows = records.iter().map(|record| {
        record
            .field_values()
            .into_iter()
            .map(Option::unwrap_or_default)
            .collect::<Vec<_>>()
    });
    write_rows(path, T::FIELDS.iter().copied(), rows)?;
    debug!(
        path = %path.display(),
        source = %T::SOURCE,
        rows = records.len(),
        "wrote cleaned records"
    );
    Ok(())
}

/// Write the unified dataset.
pub fn write_unified(path: &Path, records: &[UnifiedRecord]) -> Result<()> {
    write_rows(path, unified_columns(), records.iter().map(UnifiedRecord::cells))?;
    debug!(path = %path.display(), rows = records.len(), "wrote unified records");
    Ok(())
}

fn write_rows<H, R>(path: &Path, header: H, rows: R) -> Result<()>
where
    H: IntoIterator,
    H::Item: AsRef<[u8]>,
    R: IntoIterator<Item = Vec<String>>,
{
    ensure_parent_dir(path)?;
    let csv_error = |source: csv::Error| OutputError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = csv::Writer::from_path(path).map_err(csv_error)?;
    writer.write_record(header).map_err(csv_error)?;
    for row in rows {
        writer.write_record(&row).map_err(csv_error)?;
    }
    writer.flush().map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_stage_file_name() {
        let now = NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|d| d.and_hms_opt(7, 5, 42))
            .unwrap();
        assert_eq!(
            stage_file_name("metacritic_cleaned", now),
            "metacritic_cleaned_20240309_070542.csv"
        );
    }

    #[test]
    fn test_parent_dirs_are_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("final").join("nested").join("out.csv");
        write_unified(&path, &[]).unwrap();
        assert!(path.exists());
    }
}
