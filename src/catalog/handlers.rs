use axum::{
    extract::{DefaultBodyLimit, Query, State},
    http::{header, HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use bytes::Bytes;
use tracing::{info, instrument};

use super::dto::{LogRecommendationRequest, RecommendationsView, SearchQuery};
use super::images::check_upload;
use crate::error::AppError;
use crate::nutrition::ledger::MealEntry;
use crate::nutrition::types::FoodItem;
use crate::session::services::{self, today};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/foods/search", get(search_foods))
        .route(
            "/foods/identify",
            post(identify_food).layer(DefaultBodyLimit::max(20 * 1024 * 1024)), // 20MB
        )
        .route("/recommendations", get(recommendations))
        .route("/recommendations/log", post(log_recommendation))
}

#[instrument(skip(state))]
pub async fn search_foods(
    State(state): State<AppState>,
    Query(p): Query<SearchQuery>,
) -> Result<Json<Vec<FoodItem>>, (StatusCode, String)> {
    let foods = state.catalog.search(&p.q).await.map_err(AppError::from)?;
    Ok(Json(foods))
}

/// POST /foods/identify with the raw image as the body.
#[instrument(skip(state, headers, body))]
pub async fn identify_food(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Vec<FoodItem>>, (StatusCode, String)> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/octet-stream")
        .to_string();
    let ext = check_upload(&body, &content_type)?;
    info!(bytes = body.len(), ext, "identifying food from image");

    let foods = state
        .catalog
        .identify(body, &content_type)
        .await
        .map_err(AppError::from)?;
    Ok(Json(foods))
}

#[instrument(skip(state))]
pub async fn recommendations(
    State(state): State<AppState>,
) -> Result<Json<RecommendationsView>, (StatusCode, String)> {
    let (goal, remaining) = {
        let mut slot = state.session.lock().await;
        let session = services::active(&state, &mut slot, today()).await?;
        (session.profile().goal, session.remaining())
    };

    let meals = state
        .recommender
        .recommend(goal, &remaining)
        .await
        .map_err(AppError::from)?;
    Ok(Json(RecommendationsView {
        goal,
        remaining,
        meals,
    }))
}

#[instrument(skip(state, payload))]
pub async fn log_recommendation(
    State(state): State<AppState>,
    Json(payload): Json<LogRecommendationRequest>,
) -> Result<(StatusCode, Json<MealEntry>), (StatusCode, String)> {
    let mut slot = state.session.lock().await;
    let session = services::active(&state, &mut slot, today()).await?;
    let food = FoodItem::from(&payload.recommendation);
    let mut draft = session.clone();
    let entry = draft.add_meal(Some(food), payload.meal_type, payload.servings)?;
    services::persist_ledger(&state, &draft).await?;
    *session = draft;
    Ok((StatusCode::CREATED, Json(entry)))
}
