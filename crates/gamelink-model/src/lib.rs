pub mod error;
pub mod raw;
pub mod record;
pub mod source;
pub mod unified;

pub use error::{ModelError, Result};
pub use raw::RawRecord;
pub use record::{CatalogEntry, ReviewRecord, StoreRecord, format_number};
pub use source::Source;
pub use unified::{
    COMBINED_SCORE_COLUMN, IS_MATCHED_COLUMN, MATCH_CONFIDENCE_COLUMN, TITLE_COLUMN, UnifiedRecord,
    unified_columns,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unified_row_width_matches_header() {
        let record = UnifiedRecord::unmatched_review(ReviewRecord {
            title: Some("Hades".to_string()),
            metascore: Some(93.0),
            ..ReviewRecord::default()
        });
        assert_eq!(record.cells().len(), unified_columns().len());
    }

    #[test]
    fn review_record_serializes() {
        let record = ReviewRecord {
            title: Some("Celeste".to_string()),
            metascore: Some(92.0),
            release_date: Some("2018-01-25".to_string()),
            release_year: Some(2018),
            ..ReviewRecord::default()
        };
        let json = serde_json::to_string(&record).expect("serialize record");
        let round: ReviewRecord = serde_json::from_str(&json).expect("deserialize record");
        assert_eq!(round, record);
    }
}
