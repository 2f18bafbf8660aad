use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::middleware::request_id::RequestId;
use crate::models::{
    menu::suggest_menu, FeedbackRecord, MealStyle, Medal, MenuCategory, PriorityMode, Satisfaction,
    ScoredListing, TastePreference,
};
use crate::services::ranker;

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub menu: String,
    pub region: String,
    pub priority: PriorityMode,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub menu: String,
    pub region: String,
    pub priority: PriorityMode,
    /// Ranked matches, best first; empty when nothing matched
    pub results: Vec<RankedListingResponse>,
}

#[derive(Debug, Serialize)]
pub struct RankedListingResponse {
    pub rank: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medal: Option<Medal>,
    pub restaurant: String,
    pub menu: String,
    pub region: String,
    pub price: u32,
    pub rating: f64,
    pub bonus_score: f64,
    pub final_score: f64,
    pub summary: String,
    /// Representative image path; only ever present on rank 1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl RankedListingResponse {
    fn from_scored(scored: ScoredListing, image: Option<String>) -> Self {
        Self {
            rank: scored.rank,
            medal: scored.medal,
            restaurant: scored.listing.restaurant,
            menu: scored.listing.menu,
            region: scored.listing.region,
            price: scored.listing.price,
            rating: scored.listing.rating,
            bonus_score: scored.bonus_score,
            final_score: scored.final_score,
            summary: scored.listing.summary,
            image,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub menu: String,
    pub restaurant: String,
    pub satisfaction: Satisfaction,
    #[serde(default)]
    pub comment: String,
}

#[derive(Debug, Deserialize)]
pub struct SuggestionQuery {
    pub taste: TastePreference,
    pub style: MealStyle,
}

#[derive(Debug, Serialize)]
pub struct SuggestionResponse {
    pub menu: String,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Ranks listings for a menu/region query under the selected priority
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<RecommendationResponse>> {
    if request.menu.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "A menu must be selected or entered".to_string(),
        ));
    }

    tracing::info!(
        request_id = %request_id,
        menu = %request.menu,
        region = %request.region,
        priority = ?request.priority,
        "Processing recommendation request"
    );

    let ranked = ranker::rank(
        state.listings.listings(),
        &request.menu,
        &request.region,
        request.priority,
        &state.keywords,
    );

    if ranked.is_empty() {
        tracing::info!(
            request_id = %request_id,
            menu = %request.menu,
            region = %request.region,
            "No listings matched"
        );
    }

    let results = ranked
        .into_iter()
        .map(|scored| {
            // Only the top result carries the illustrative image.
            let image = if scored.rank == 1 {
                state.assets.image_for(&scored.listing.menu)
            } else {
                None
            };
            RankedListingResponse::from_scored(scored, image)
        })
        .collect();

    Ok(Json(RecommendationResponse {
        menu: request.menu,
        region: request.region,
        priority: request.priority,
        results,
    }))
}

/// Appends one feedback record for a shown listing
pub async fn submit_feedback(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<FeedbackRequest>,
) -> AppResult<(StatusCode, Json<Value>)> {
    if request.menu.trim().is_empty() || request.restaurant.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "Feedback must name both a menu and a restaurant".to_string(),
        ));
    }

    let record = FeedbackRecord {
        menu: request.menu,
        restaurant: request.restaurant,
        satisfaction: request.satisfaction,
        comment: request.comment,
    };

    state.feedback.append(&record).await?;

    tracing::info!(request_id = %request_id, "Feedback accepted");
    Ok((StatusCode::CREATED, Json(json!({ "status": "recorded" }))))
}

/// Distinct regions present in the dataset
pub async fn get_regions(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.listings.regions())
}

/// Menu suggestion from the taste/style lookup table
pub async fn get_menu_suggestion(
    Query(params): Query<SuggestionQuery>,
) -> Json<SuggestionResponse> {
    let menu = suggest_menu(params.taste, params.style);
    Json(SuggestionResponse {
        menu: menu.to_string(),
    })
}

/// All browsable menu categories
pub async fn get_categories() -> Json<Vec<MenuCategory>> {
    Json(MenuCategory::ALL.to_vec())
}

/// Menus belonging to one category
pub async fn get_category_menus(Path(category): Path<MenuCategory>) -> Json<Vec<String>> {
    let menus = category
        .menus()
        .iter()
        .map(|menu| (*menu).to_string())
        .collect();
    Json(menus)
}
