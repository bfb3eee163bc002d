//! Greedy best-match linkage.

use std::time::Instant;

use gamelink_model::{CatalogEntry, ReviewRecord, StoreRecord, UnifiedRecord};
use gamelink_normalize::clean_title;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, info_span, warn};

use crate::reconcile::reconcile;
use crate::score::{MatchKeys, MatchScore, PairScorer};
use crate::similarity::{IndelRatio, SimilarityMeasure};

/// Scores must be strictly greater than this to be accepted.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.70;

/// Tuning for the linker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinkOptions {
    pub threshold: f64,
    pub title_weight: f64,
    pub developer_weight: f64,
    /// Weight of the Metacritic metascore in the combined score.
    pub review_weight: f64,
    /// Weight of the Steam review score in the combined score.
    pub store_weight: f64,
    /// Scan Metacritic records on the rayon pool.
    pub parallel: bool,
}

impl Default for LinkOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_MATCH_THRESHOLD,
            title_weight: 0.7,
            developer_weight: 0.3,
            review_weight: 0.6,
            store_weight: 0.4,
            parallel: true,
        }
    }
}

impl LinkOptions {
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Whether a score clears the threshold. Equality is rejected.
pub fn is_confident(score: f64, threshold: f64) -> bool {
    score > threshold
}

/// Accepted pairing of a Metacritic record with a Steam record.
///
/// Indices refer to the title-filtered inputs held by [`LinkOutcome`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchCandidate {
    pub review_index: usize,
    pub store_index: usize,
    pub score: MatchScore,
}

/// Counters describing one linkage run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LinkSummary {
    pub review_records: usize,
    pub store_records: usize,
    /// Records dropped before matching for lack of a usable title.
    pub untitled_reviews: usize,
    pub untitled_store: usize,
    pub matched: usize,
    pub unmatched_reviews: usize,
    pub unmatched_store: usize,
    /// Steam records chosen by more than one Metacritic record.
    pub shared_store_matches: usize,
    /// Unmatched Steam records hidden because a matched Steam record has the same title.
    pub store_title_collisions: usize,
}

impl LinkSummary {
    pub fn total_rows(&self) -> usize {
        self.matched + self.unmatched_reviews + self.unmatched_store
    }
}

/// Unified rows plus the run summary and accepted pairings.
#[derive(Debug, Clone)]
pub struct LinkOutcome {
    pub records: Vec<UnifiedRecord>,
    pub matches: Vec<MatchCandidate>,
    pub summary: LinkSummary,
}

/// Links Metacritic records to Steam records.
#[derive(Debug, Clone)]
pub struct Linker<S = IndelRatio> {
    options: LinkOptions,
    scorer: PairScorer<S>,
}

impl Linker<IndelRatio> {
    pub fn new(options: LinkOptions) -> Self {
        Self::with_measure(options, IndelRatio)
    }
}

impl Default for Linker<IndelRatio> {
    fn default() -> Self {
        Self::new(LinkOptions::default())
    }
}

impl<S: SimilarityMeasure> Linker<S> {
    pub fn with_measure(options: LinkOptions, measure: S) -> Self {
        Self {
            scorer: PairScorer::new(measure, options.title_weight, options.developer_weight),
            options,
        }
    }

    pub fn options(&self) -> &LinkOptions {
        &self.options
    }

    /// Link both catalogs into unified rows.
    pub fn link(&self, reviews: &[ReviewRecord], store: &[StoreRecord]) -> Vec<UnifiedRecord> {
        self.link_with_summary(reviews, store).records
    }

    /// Link both catalogs, keeping the accepted pairs and counters.
    pub fn link_with_summary(&self, reviews: &[ReviewRecord], store: &[StoreRecord]) -> LinkOutcome {
        let span = info_span!("link", reviews = reviews.len(), store = store.len());
        let _guard = span.enter();
        let started = Instant::now();

        let titled_reviews = titled(reviews);
        let titled_store = titled(store);
        let matches = self.best_matches(&titled_reviews, &titled_store);
        let (records, mut summary) =
            reconcile(&titled_reviews, &titled_store, &matches, &self.options);
        summary.untitled_reviews = reviews.len() - titled_reviews.len();
        summary.untitled_store = store.len() - titled_store.len();

        info!(
            matched = summary.matched,
            unmatched_reviews = summary.unmatched_reviews,
            unmatched_store = summary.unmatched_store,
            duration_ms = started.elapsed().as_millis() as u64,
            "linkage complete"
        );
        if summary.shared_store_matches > 0 {
            warn!(
                shared = summary.shared_store_matches,
                "steam records matched by more than one metacritic record"
            );
        }
        if summary.store_title_collisions > 0 {
            warn!(
                collisions = summary.store_title_collisions,
                "unmatched steam records dropped because their title was matched"
            );
        }

        LinkOutcome {
            records,
            matches: matches.into_iter().flatten().collect(),
            summary,
        }
    }

    /// Best Steam candidate for each Metacritic record, in Metacritic order.
    ///
    /// Both slices are expected to be title-cleaned already.
    fn best_matches(
        &self,
        reviews: &[ReviewRecord],
        store: &[StoreRecord],
    ) -> Vec<Option<MatchCandidate>> {
        let store_keys: Vec<MatchKeys> = store.iter().map(keys).collect();
        let review_keys: Vec<MatchKeys> = reviews.iter().map(keys).collect();

        let find = |(index, review): (usize, &MatchKeys)| self.best_match(index, review, &store_keys);
        if self.options.parallel {
            review_keys.par_iter().enumerate().map(find).collect()
        } else {
            review_keys.iter().enumerate().map(find).collect()
        }
    }

    fn best_match(
        &self,
        review_index: usize,
        review: &MatchKeys,
        store: &[MatchKeys],
    ) -> Option<MatchCandidate> {
        let mut best: Option<MatchCandidate> = None;
        let mut best_score = 0.0;
        for (store_index, candidate) in store.iter().enumerate() {
            let score = self.scorer.score_keys(review, candidate);
            // Strict comparison keeps the earliest candidate on ties.
            if score.score > best_score && is_confident(score.score, self.options.threshold) {
                best_score = score.score;
                best = Some(MatchCandidate {
                    review_index,
                    store_index,
                    score,
                });
            }
        }
        if let Some(found) = &best {
            debug!(
                review = review.title.as_str(),
                store = store[found.store_index].title.as_str(),
                score = found.score.score,
                "accepted match"
            );
        }
        best
    }
}

/// Link with default options.
pub fn link(reviews: &[ReviewRecord], store: &[StoreRecord]) -> Vec<UnifiedRecord> {
    Linker::default().link(reviews, store)
}

fn keys<T: CatalogEntry>(record: &T) -> MatchKeys {
    MatchKeys::new(record.title().unwrap_or_default(), record.developer())
}

/// Clean titles and drop records left without one.
fn titled<T: CatalogEntry + Clone>(records: &[T]) -> Vec<T> {
    records
        .iter()
        .filter_map(|record| {
            let title = clean_title(record.title()?)?;
            let mut record = record.clone();
            *record.title_mut() = Some(title);
            Some(record)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(title: &str) -> ReviewRecord {
        ReviewRecord {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    fn store(title: &str) -> StoreRecord {
        StoreRecord {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn threshold_is_strict() {
        assert!(!is_confident(0.70, DEFAULT_MATCH_THRESHOLD));
        assert!(is_confident(0.7000001, DEFAULT_MATCH_THRESHOLD));
    }

    #[test]
    fn untitled_records_are_dropped_before_matching() {
        let reviews = vec![review("Hades"), ReviewRecord::default(), review("  ")];
        let store = vec![store("12. Hades"), StoreRecord::default()];
        let outcome = Linker::default().link_with_summary(&reviews, &store);
        assert_eq!(outcome.summary.untitled_reviews, 2);
        assert_eq!(outcome.summary.untitled_store, 1);
        assert_eq!(outcome.summary.matched, 1);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].title, "Hades");
    }

    #[test]
    fn earliest_candidate_wins_ties() {
        let reviews = vec![review("Hades")];
        let store = vec![store("Hades"), store("hades")];
        let outcome = Linker::default().link_with_summary(&reviews, &store);
        assert_eq!(outcome.matches.len(), 1);
        assert_eq!(outcome.matches[0].store_index, 0);
    }
}
