use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::{Catalog, DecisionTree, Recommender};
use crate::models::{
    CategoriesResponse, DestinationsQuery, DestinationsResponse, ErrorResponse, HealthResponse,
    NavigateTreeRequest, RecommendRequest, RecommendResponse, TreeStepResponse,
};

/// Application state shared across all handlers
///
/// Catalog, tree and recommender are immutable after startup, so the worker
/// pool shares them without locking.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub tree: Arc<DecisionTree>,
    pub recommender: Recommender,
    pub alternatives: usize,
}

/// Configure all recommendation-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/catalog/categories", web::get().to(list_categories))
        .route("/catalog/destinations", web::get().to(list_destinations))
        .route("/recommendations/find", web::post().to(find_recommendations))
        .route("/tree", web::get().to(tree_root))
        .route("/tree/navigate", web::post().to(navigate_tree));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// List the catalog's category labels
///
/// GET /api/v1/catalog/categories
async fn list_categories(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(CategoriesResponse {
        categories: state.catalog.categories(),
    })
}

/// List catalog destinations, optionally filtered by category
///
/// GET /api/v1/catalog/destinations?category=Cultura
///
/// The category label matches case-insensitively; an unknown label yields
/// an empty list.
async fn list_destinations(
    state: web::Data<AppState>,
    query: web::Query<DestinationsQuery>,
) -> impl Responder {
    let destinations: Vec<_> = match &query.category {
        Some(label) => state
            .catalog
            .filter_by_category(label)
            .into_iter()
            .cloned()
            .collect(),
        None => state.catalog.destinations().to_vec(),
    };

    let total = destinations.len();

    tracing::debug!(
        "Listing {} destinations (category filter: {:?})",
        total,
        query.category
    );

    HttpResponse::Ok().json(DestinationsResponse {
        destinations,
        total,
    })
}

/// Personalized recommendation endpoint
///
/// POST /api/v1/recommendations/find
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "age": 27,
///   "stayDays": 4,
///   "budget": "economico|moderado|premium",
///   "interests": ["string"]
/// }
/// ```
async fn find_recommendations(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommendation request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let profile = req.into_inner().into_profile();

    tracing::info!(
        "Ranking catalog for traveler: {} ({} interests, budget {})",
        profile.name,
        profile.interests.len(),
        profile.budget.label()
    );

    let result = state.recommender.rank(&profile, &state.catalog);

    let response = RecommendResponse {
        traveler: profile.name,
        primary: result.primary().cloned(),
        alternatives: result.alternatives(state.alternatives).to_vec(),
        total_considered: result.total_considered,
    };

    let returned = usize::from(response.primary.is_some()) + response.alternatives.len();
    tracing::info!(
        "Returning {} recommendation(s) for {} (from {} destinations)",
        returned,
        response.traveler,
        response.total_considered
    );

    HttpResponse::Ok().json(response)
}

/// Decision-tree root endpoint
///
/// GET /api/v1/tree
async fn tree_root(state: web::Data<AppState>) -> impl Responder {
    let root = state.tree.root();

    HttpResponse::Ok().json(TreeStepResponse::Question {
        question: state.tree.prompt(root).unwrap_or_default().to_string(),
        options: state
            .tree
            .options(root)
            .into_iter()
            .map(|o| o.to_string())
            .collect(),
    })
}

/// Decision-tree navigation endpoint
///
/// POST /api/v1/tree/navigate
///
/// Request body:
/// ```json
/// { "answers": ["Aventura", "Mar"] }
/// ```
///
/// Replays the answers from the root and returns either the next question
/// or the resolved destination for a leaf.
async fn navigate_tree(
    state: web::Data<AppState>,
    req: web::Json<NavigateTreeRequest>,
) -> impl Responder {
    let mut current = state.tree.root();

    for answer in &req.answers {
        match state.tree.navigate(current, answer) {
            Some(next) => current = next,
            None => {
                tracing::debug!("No option '{}' at the current question", answer);
                return HttpResponse::NotFound().json(ErrorResponse {
                    error: "unknown_answer".to_string(),
                    message: format!("'{}' is not an option at the current question", answer),
                    status_code: 404,
                });
            }
        }
    }

    match state.tree.prompt(current) {
        Some(prompt) => HttpResponse::Ok().json(TreeStepResponse::Question {
            question: prompt.to_string(),
            options: state
                .tree
                .options(current)
                .into_iter()
                .map(|o| o.to_string())
                .collect(),
        }),
        None => match state.tree.resolve(current, &state.catalog) {
            Some(destination) => HttpResponse::Ok().json(TreeStepResponse::Destination {
                destination: destination.clone(),
            }),
            None => {
                // Leaves are validated against the catalog at startup
                tracing::error!("Decision-tree leaf failed to resolve against the catalog");
                HttpResponse::InternalServerError().json(ErrorResponse {
                    error: "unresolved_leaf".to_string(),
                    message: "Decision-tree leaf does not match any catalog destination"
                        .to_string(),
                    status_code: 500,
                })
            }
        },
    }
}
