//! String similarity measures.

use rapidfuzz::distance::indel;

/// Similarity of two strings in `[0, 1]`; identical strings score 1.
pub trait SimilarityMeasure: Send + Sync {
    fn similarity(&self, a: &str, b: &str) -> f64;
}

/// Normalized Indel similarity: `2 * LCS / (len(a) + len(b))`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndelRatio;

impl SimilarityMeasure for IndelRatio {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        indel::normalized_similarity(a.chars(), b.chars())
    }
}

/// Case-insensitive [`IndelRatio`] of two titles.
pub fn title_similarity(a: &str, b: &str) -> f64 {
    IndelRatio.similarity(&a.to_lowercase(), &b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_score_one() {
        assert_eq!(IndelRatio.similarity("Portal 2", "Portal 2"), 1.0);
    }

    #[test]
    fn case_is_ignored_for_titles() {
        assert_eq!(title_similarity("Elden Ring", "elden ring"), 1.0);
    }

    #[test]
    fn disjoint_strings_score_near_zero() {
        assert!(IndelRatio.similarity("abc", "xyz") < 0.01);
    }

    #[test]
    fn partial_overlap_is_between() {
        // LCS("abcdefghij", "abcdefgxyz") = 7, so 14 / 20.
        let sim = IndelRatio.similarity("abcdefghij", "abcdefgxyz");
        assert!((sim - 0.7).abs() < 1e-9, "got {sim}");
    }
}
