// Core algorithm exports
pub mod catalog;
pub mod filters;
pub mod recommender;
pub mod scoring;
pub mod tree;

pub use catalog::{Catalog, CatalogError};
pub use filters::{filter_by_category, matches_category};
pub use recommender::{RecommendationResult, Recommender};
pub use scoring::{category_for_interest, score_destination};
pub use tree::{DecisionNode, DecisionTree, NodeId, TreeError};
