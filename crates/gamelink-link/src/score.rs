//! Pairwise scoring of a Metacritic record against a Steam record.

use serde::Serialize;

use crate::similarity::SimilarityMeasure;

/// Lowercased comparison keys of one record.
#[derive(Debug, Clone)]
pub(crate) struct MatchKeys {
    pub title: String,
    pub developer: Option<String>,
}

impl MatchKeys {
    pub fn new(title: &str, developer: Option<&str>) -> Self {
        Self {
            title: title.to_lowercase(),
            developer: developer
                .filter(|d| !gamelink_normalize::is_missing(d))
                .map(str::to_lowercase),
        }
    }
}

/// Score of a single pair, with its components kept for explanation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchScore {
    /// Final weighted score in `[0, 1]`.
    pub score: f64,
    /// Title similarity.
    pub title: f64,
    /// Developer similarity, when both sides name a developer.
    pub developer: Option<f64>,
}

impl MatchScore {
    /// Human-readable breakdown of the score.
    pub fn explain(&self) -> String {
        match self.developer {
            Some(developer) => format!(
                "Title similarity: {:.0}%; Developer similarity: {:.0}%",
                self.title * 100.0,
                developer * 100.0
            ),
            None => format!("Title similarity: {:.0}%", self.title * 100.0),
        }
    }
}

/// Weighted title/developer scorer.
///
/// Title similarity alone is the score unless both records have a
/// developer, in which case the two similarities are blended.
#[derive(Debug, Clone)]
pub struct PairScorer<S> {
    measure: S,
    title_weight: f64,
    developer_weight: f64,
}

impl<S: SimilarityMeasure> PairScorer<S> {
    pub fn new(measure: S, title_weight: f64, developer_weight: f64) -> Self {
        Self {
            measure,
            title_weight,
            developer_weight,
        }
    }

    /// Score two records given their titles and developers.
    pub fn score(
        &self,
        left_title: &str,
        left_developer: Option<&str>,
        right_title: &str,
        right_developer: Option<&str>,
    ) -> MatchScore {
        self.score_keys(
            &MatchKeys::new(left_title, left_developer),
            &MatchKeys::new(right_title, right_developer),
        )
    }

    pub(crate) fn score_keys(&self, left: &MatchKeys, right: &MatchKeys) -> MatchScore {
        let title = self.measure.similarity(&left.title, &right.title);
        match (&left.developer, &right.developer) {
            (Some(left_dev), Some(right_dev)) => {
                let developer = self.measure.similarity(left_dev, right_dev);
                MatchScore {
                    score: title * self.title_weight + developer * self.developer_weight,
                    title,
                    developer: Some(developer),
                }
            }
            _ => MatchScore {
                score: title,
                title,
                developer: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::similarity::IndelRatio;

    fn scorer() -> PairScorer<IndelRatio> {
        PairScorer::new(IndelRatio, 0.7, 0.3)
    }

    #[test]
    fn title_only_without_both_developers() {
        let score = scorer().score("Celeste", Some("Maddy Makes Games"), "celeste", None);
        assert_eq!(score.score, 1.0);
        assert_eq!(score.developer, None);
    }

    #[test]
    fn placeholder_developer_is_ignored() {
        let score = scorer().score("Celeste", Some("N/A"), "Celeste", Some("Extremely OK"));
        assert_eq!(score.developer, None);
        assert_eq!(score.score, 1.0);
    }

    #[test]
    fn developer_blends_into_score() {
        let score = scorer().score("Celeste", Some("Matt Makes Games"), "Celeste", Some("Zzz"));
        let developer = score.developer.unwrap();
        assert!(developer < 0.5);
        assert!((score.score - (0.7 + 0.3 * developer)).abs() < 1e-12);
    }

    #[test]
    fn explanation_lists_components() {
        let score = scorer().score("Doom", Some("id Software"), "DOOM", Some("id Software"));
        assert_eq!(
            score.explain(),
            "Title similarity: 100%; Developer similarity: 100%"
        );
    }
}
