//! Assembly of unified rows from accepted matches.

use std::collections::{BTreeMap, BTreeSet};

use gamelink_model::{CatalogEntry, ReviewRecord, StoreRecord, UnifiedRecord};

use crate::engine::{LinkOptions, LinkSummary, MatchCandidate};

/// Weighted blend of the metascore and the Steam review score.
pub(crate) fn combined_score(
    review: &ReviewRecord,
    store: &StoreRecord,
    options: &LinkOptions,
) -> Option<f64> {
    let metascore = review.quality_score()?;
    let store_score = store.quality_score()?;
    Some(metascore * options.review_weight + store_score * options.store_weight)
}

/// Build rows in output order: matched pairs, then unmatched Metacritic
/// records, then unmatched Steam records.
///
/// `matches` holds one entry per review, in review order.
pub(crate) fn reconcile(
    reviews: &[ReviewRecord],
    store: &[StoreRecord],
    matches: &[Option<MatchCandidate>],
    options: &LinkOptions,
) -> (Vec<UnifiedRecord>, LinkSummary) {
    let mut summary = LinkSummary {
        review_records: reviews.len(),
        store_records: store.len(),
        ..LinkSummary::default()
    };

    let mut matched_rows = Vec::new();
    let mut unmatched_reviews = Vec::new();
    let mut claims: BTreeMap<usize, usize> = BTreeMap::new();

    for (review, candidate) in reviews.iter().zip(matches) {
        match candidate {
            Some(candidate) => {
                let store_record = &store[candidate.store_index];
                *claims.entry(candidate.store_index).or_default() += 1;
                matched_rows.push(UnifiedRecord {
                    title: review.title.clone().unwrap_or_default(),
                    review: Some(review.clone()),
                    store: Some(store_record.clone()),
                    match_confidence: candidate.score.score,
                    is_matched: true,
                    combined_score: combined_score(review, store_record, options),
                });
            }
            None => unmatched_reviews.push(UnifiedRecord::unmatched_review(review.clone())),
        }
    }

    // Steam leftovers are identified by title, not by identity.
    let matched_titles: BTreeSet<&str> = claims
        .keys()
        .filter_map(|&index| store[index].title())
        .collect();
    let mut unmatched_store = Vec::new();
    for (index, record) in store.iter().enumerate() {
        let title = record.title().unwrap_or_default();
        if !matched_titles.contains(title) {
            unmatched_store.push(UnifiedRecord::unmatched_store(record.clone()));
        } else if !claims.contains_key(&index) {
            summary.store_title_collisions += 1;
        }
    }

    summary.matched = matched_rows.len();
    summary.unmatched_reviews = unmatched_reviews.len();
    summary.unmatched_store = unmatched_store.len();
    summary.shared_store_matches = claims.values().filter(|&&count| count > 1).count();

    let mut records = matched_rows;
    records.extend(unmatched_reviews);
    records.extend(unmatched_store);
    records.retain(|row| !row.title.is_empty());
    (records, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::MatchScore;

    fn review(title: &str, metascore: Option<f64>) -> ReviewRecord {
        ReviewRecord {
            title: Some(title.to_string()),
            metascore,
            ..Default::default()
        }
    }

    fn store(title: &str, review_score: Option<f64>) -> StoreRecord {
        StoreRecord {
            title: Some(title.to_string()),
            review_score_approx: review_score,
            ..Default::default()
        }
    }

    fn candidate(review_index: usize, store_index: usize) -> Option<MatchCandidate> {
        Some(MatchCandidate {
            review_index,
            store_index,
            score: MatchScore {
                score: 0.9,
                title: 0.9,
                developer: None,
            },
        })
    }

    #[test]
    fn combined_score_needs_both_sides() {
        let options = LinkOptions::default();
        let combined = combined_score(&review("A", Some(80.0)), &store("A", Some(85.0)), &options);
        assert!((combined.unwrap() - 82.0).abs() < 1e-9);
        assert_eq!(combined_score(&review("A", None), &store("A", Some(85.0)), &options), None);
        assert_eq!(combined_score(&review("A", Some(80.0)), &store("A", None), &options), None);
    }

    #[test]
    fn rows_follow_block_order() {
        let reviews = vec![review("B", None), review("A", None), review("C", None)];
        let store = vec![store("X", None), store("A2", None), store("B2", None)];
        let matches = vec![candidate(0, 2), None, candidate(2, 1)];
        let (rows, summary) = reconcile(&reviews, &store, &matches, &LinkOptions::default());
        let titles: Vec<&str> = rows.iter().map(|row| row.title.as_str()).collect();
        assert_eq!(titles, ["B", "C", "A", "X"]);
        assert_eq!(summary.matched, 2);
        assert_eq!(summary.unmatched_reviews, 1);
        assert_eq!(summary.unmatched_store, 1);
    }

    #[test]
    fn shared_store_record_is_counted_once() {
        let reviews = vec![review("Doom", None), review("Doom II", None)];
        let store = vec![store("DOOM", None)];
        let matches = vec![candidate(0, 0), candidate(1, 0)];
        let (rows, summary) = reconcile(&reviews, &store, &matches, &LinkOptions::default());
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.is_matched));
        assert_eq!(summary.shared_store_matches, 1);
        assert_eq!(summary.unmatched_store, 0);
    }

    #[test]
    fn same_titled_store_record_is_hidden() {
        let reviews = vec![review("Tetris", None)];
        let store = vec![store("Tetris", None), store("Tetris", None)];
        let matches = vec![candidate(0, 0)];
        let (rows, summary) = reconcile(&reviews, &store, &matches, &LinkOptions::default());
        assert_eq!(rows.len(), 1);
        assert_eq!(summary.store_title_collisions, 1);
    }
}
