//! Rows of the final, reconciled dataset.

use serde::Serialize;

use crate::record::{CatalogEntry, ReviewRecord, StoreRecord, format_number};

pub const TITLE_COLUMN: &str = "game_title";
pub const MATCH_CONFIDENCE_COLUMN: &str = "match_confidence";
pub const IS_MATCHED_COLUMN: &str = "is_matched";
pub const COMBINED_SCORE_COLUMN: &str = "combined_score";

/// One row of the unified dataset.
///
/// A row holds a matched pair, or a single record from either side with the
/// other side absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnifiedRecord {
    /// Canonical (cleaned) title.
    pub title: String,
    pub review: Option<ReviewRecord>,
    pub store: Option<StoreRecord>,
    /// Similarity of the pair; 0 for unmatched rows.
    pub match_confidence: f64,
    pub is_matched: bool,
    /// Blended quality score, only for matched rows with both inputs.
    pub combined_score: Option<f64>,
}

impl UnifiedRecord {
    /// Row for a Metacritic record with no Steam counterpart.
    pub fn unmatched_review(review: ReviewRecord) -> Self {
        Self {
            title: review.title.clone().unwrap_or_default(),
            review: Some(review),
            store: None,
            match_confidence: 0.0,
            is_matched: false,
            combined_score: None,
        }
    }

    /// Row for a Steam record no Metacritic record matched.
    pub fn unmatched_store(store: StoreRecord) -> Self {
        Self {
            title: store.title.clone().unwrap_or_default(),
            review: None,
            store: Some(store),
            match_confidence: 0.0,
            is_matched: false,
            combined_score: None,
        }
    }

    /// Cell text for every column of [`unified_columns`]; missing values are empty.
    pub fn cells(&self) -> Vec<String> {
        let mut cells = Vec::with_capacity(unified_width());
        cells.push(self.title.clone());
        push_side(&mut cells, self.review.as_ref());
        push_side(&mut cells, self.store.as_ref());
        cells.push(format_number(self.match_confidence));
        cells.push(self.is_matched.to_string());
        cells.push(self.combined_score.map(format_number).unwrap_or_default());
        cells
    }
}

fn push_side<T: CatalogEntry>(cells: &mut Vec<String>, record: Option<&T>) {
    match record {
        Some(record) => cells.extend(
            record
                .field_values()
                .into_iter()
                .map(Option::unwrap_or_default),
        ),
        None => cells.extend(std::iter::repeat_n(String::new(), T::FIELDS.len())),
    }
}

fn unified_width() -> usize {
    ReviewRecord::FIELDS.len() + StoreRecord::FIELDS.len() + 4
}

fn prefixed<T: CatalogEntry>() -> impl Iterator<Item = String> {
    let prefix = T::SOURCE.column_prefix();
    T::FIELDS.iter().map(move |field| format!("{prefix}{field}"))
}

/// Column names of the unified table, in output order.
pub fn unified_columns() -> Vec<String> {
    let mut columns = Vec::with_capacity(unified_width());
    columns.push(TITLE_COLUMN.to_string());
    columns.extend(prefixed::<ReviewRecord>());
    columns.extend(prefixed::<StoreRecord>());
    columns.push(MATCH_CONFIDENCE_COLUMN.to_string());
    columns.push(IS_MATCHED_COLUMN.to_string());
    columns.push(COMBINED_SCORE_COLUMN.to_string());
    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_are_prefixed_per_source() {
        let columns = unified_columns();
        assert_eq!(columns[0], "game_title");
        assert_eq!(columns[1], "mc_title");
        assert!(columns.contains(&"steam_price_numeric".to_string()));
        assert_eq!(columns.last().map(String::as_str), Some("combined_score"));
    }

    #[test]
    fn unmatched_store_row_leaves_review_block_empty() {
        let row = UnifiedRecord::unmatched_store(StoreRecord {
            title: Some("Hollow Knight".to_string()),
            app_id: Some("367520".to_string()),
            ..StoreRecord::default()
        });
        let cells = row.cells();
        let columns = unified_columns();
        let mc_title = columns.iter().position(|c| c == "mc_title").unwrap();
        let steam_app_id = columns.iter().position(|c| c == "steam_app_id").unwrap();
        assert_eq!(cells[0], "Hollow Knight");
        assert_eq!(cells[mc_title], "");
        assert_eq!(cells[steam_app_id], "367520");
        assert_eq!(cells[columns.len() - 2], "false");
        assert_eq!(cells[columns.len() - 3], "0");
    }
}
