use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Dataset lookups
        .route("/regions", get(handlers::get_regions))
        // Menu suggestion tables
        .route("/menus/suggestion", get(handlers::get_menu_suggestion))
        .route("/menus/categories", get(handlers::get_categories))
        .route("/menus/categories/:category", get(handlers::get_category_menus))
        // Recommendation core
        .route("/recommendations", post(handlers::recommend))
        // Feedback
        .route("/feedback", post(handlers::submit_feedback))
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
