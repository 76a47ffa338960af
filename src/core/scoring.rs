use crate::models::{BudgetTier, Category, Destination, ScoringPoints, TravelerProfile};

/// Destinations that get the budget bonus for economic travelers
const ECONOMY_PICKS: &[&str] = &["Villa de Leyva", "Barichara"];

/// Destinations that get the budget bonus for premium travelers
const PREMIUM_PICKS: &[&str] = &["San Andrés", "Cartagena"];

/// Map a traveler interest to the category it speaks for, if any
///
/// Only the three top-level interests carry category weight; everything else
/// scores through activity-tag matching.
#[inline]
pub fn category_for_interest(interest: &str) -> Option<Category> {
    match interest.to_lowercase().as_str() {
        "historia" => Some(Category::Culture),
        "aventura" => Some(Category::Adventure),
        "naturaleza" => Some(Category::Nature),
        _ => None,
    }
}

/// Score one destination against a traveler profile
///
/// Scoring rules (all additive, integer points):
/// - category_match (3) once if any interest maps to the destination's category
/// - activity_match (2) per (interest, activity) pair where the interest is a
///   case-insensitive substring of the activity tag
/// - budget_match (1) for the hardcoded economy/premium picks
///
/// Returns the score and the interests that contributed to it.
pub fn score_destination(
    destination: &Destination,
    profile: &TravelerProfile,
    points: &ScoringPoints,
) -> (u32, Vec<String>) {
    let mut score = 0;
    let mut matched_interests = Vec::new();
    // Interests are a set; repeated entries must not double-count
    let mut seen = Vec::new();

    for interest in &profile.interests {
        let needle = interest.to_lowercase();
        if seen.contains(&needle) {
            continue;
        }

        let mut matched = false;

        if category_for_interest(interest) == Some(destination.category) {
            score += points.category_match;
            matched = true;
        }

        for activity in &destination.activities {
            if activity.to_lowercase().contains(&needle) {
                score += points.activity_match;
                matched = true;
            }
        }

        if matched {
            matched_interests.push(interest.clone());
        }
        seen.push(needle);
    }

    if budget_pick(profile.budget, &destination.name) {
        score += points.budget_match;
    }

    (score, matched_interests)
}

/// Check whether a destination gets the budget bonus for this tier
#[inline]
fn budget_pick(budget: BudgetTier, name: &str) -> bool {
    match budget {
        BudgetTier::Economico => ECONOMY_PICKS.contains(&name),
        BudgetTier::Premium => PREMIUM_PICKS.contains(&name),
        BudgetTier::Moderado => false,
    }
}
