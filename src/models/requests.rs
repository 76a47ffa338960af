use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{BudgetTier, TravelerProfile};

/// Request to compute a personalized recommendation
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 18, max = 99))]
    pub age: u8,
    #[serde(rename = "stayDays", default = "default_stay_days")]
    #[validate(range(min = 1, max = 30))]
    pub stay_days: u8,
    pub budget: BudgetTier,
    #[serde(default)]
    pub interests: Vec<String>,
}

fn default_stay_days() -> u8 {
    3
}

impl RecommendRequest {
    /// Build the traveler profile this request describes
    pub fn into_profile(self) -> TravelerProfile {
        TravelerProfile {
            name: self.name,
            age: self.age,
            stay_days: self.stay_days,
            budget: self.budget,
            interests: self.interests,
        }
    }
}

/// Query parameters for the destinations listing
#[derive(Debug, Clone, Deserialize)]
pub struct DestinationsQuery {
    pub category: Option<String>,
}

/// Request to replay answers through the decision tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigateTreeRequest {
    #[serde(default)]
    pub answers: Vec<String>,
}
