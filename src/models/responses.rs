use serde::{Deserialize, Serialize};

use crate::models::domain::{Destination, ScoredDestination};

/// Response for the personalized recommendation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub traveler: String,
    pub primary: Option<ScoredDestination>,
    pub alternatives: Vec<ScoredDestination>,
    #[serde(rename = "totalConsidered")]
    pub total_considered: usize,
}

/// Response listing the catalog's category labels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

/// Response listing catalog destinations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationsResponse {
    pub destinations: Vec<Destination>,
    pub total: usize,
}

/// One step of a decision-tree walk: either the next question or a leaf
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TreeStepResponse {
    Question {
        question: String,
        options: Vec<String>,
    },
    Destination {
        destination: Destination,
    },
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
