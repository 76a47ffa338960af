// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BudgetTier, Category, Destination, ScoredDestination, ScoringPoints, TravelerProfile,
};
pub use requests::{DestinationsQuery, NavigateTreeRequest, RecommendRequest};
pub use responses::{
    CategoriesResponse, DestinationsResponse, ErrorResponse, HealthResponse, RecommendResponse,
    TreeStepResponse,
};
