use crate::core::catalog::Catalog;
use crate::core::scoring::score_destination;
use crate::models::{ScoredDestination, ScoringPoints, TravelerProfile};

/// Result of one scoring pass over the catalog
#[derive(Debug)]
pub struct RecommendationResult {
    pub ranked: Vec<ScoredDestination>,
    pub total_considered: usize,
}

impl RecommendationResult {
    /// The top-ranked destination, if anything scored
    pub fn primary(&self) -> Option<&ScoredDestination> {
        self.ranked.first()
    }

    /// Up to `count` runners-up after the primary recommendation
    pub fn alternatives(&self, count: usize) -> &[ScoredDestination] {
        let start = 1.min(self.ranked.len());
        let end = (start + count).min(self.ranked.len());
        &self.ranked[start..end]
    }
}

/// Personalized recommendation orchestrator
///
/// Scores every catalog destination against the traveler profile, drops
/// zero scores, and ranks the rest. The sort is stable, so equal scores
/// keep catalog order.
#[derive(Debug, Clone)]
pub struct Recommender {
    points: ScoringPoints,
}

impl Recommender {
    pub fn new(points: ScoringPoints) -> Self {
        Self { points }
    }

    pub fn with_default_points() -> Self {
        Self {
            points: ScoringPoints::default(),
        }
    }

    /// Rank the catalog for a traveler profile
    ///
    /// A profile with no stated interests ranks nothing; the budget bonus
    /// alone never surfaces a destination.
    pub fn rank(&self, profile: &TravelerProfile, catalog: &Catalog) -> RecommendationResult {
        let total_considered = catalog.len();

        if profile.interests.is_empty() {
            return RecommendationResult {
                ranked: Vec::new(),
                total_considered,
            };
        }

        let mut ranked: Vec<ScoredDestination> = catalog
            .destinations()
            .iter()
            .filter_map(|destination| {
                let (score, matched_interests) =
                    score_destination(destination, profile, &self.points);

                if score > 0 {
                    Some(ScoredDestination {
                        destination: destination.clone(),
                        score,
                        matched_interests,
                    })
                } else {
                    None
                }
            })
            .collect();

        ranked.sort_by(|a, b| b.score.cmp(&a.score));

        RecommendationResult {
            ranked,
            total_considered,
        }
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_default_points()
    }
}
