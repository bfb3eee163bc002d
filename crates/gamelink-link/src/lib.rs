//! Record linkage between the Metacritic and Steam catalogs.
//!
//! There is no shared identifier between the two sources, so records are
//! paired by fuzzy similarity of their titles (and developers, when both
//! sides have one). Every Metacritic record is compared against every Steam
//! record; the best candidate above the confidence threshold wins.
//!
//! The assignment is greedy per Metacritic record and not one-to-one: two
//! Metacritic records may both pick the same Steam record. Such cases are
//! counted in [`LinkSummary::shared_store_matches`].

mod engine;
mod reconcile;
mod score;
mod similarity;

pub use engine::{
    DEFAULT_MATCH_THRESHOLD, LinkOptions, LinkOutcome, LinkSummary, Linker, MatchCandidate,
    is_confident, link,
};
pub use score::{MatchScore, PairScorer};
pub use similarity::{IndelRatio, SimilarityMeasure, title_similarity};
