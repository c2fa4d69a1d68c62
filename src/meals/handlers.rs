use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use super::dto::{AddMealRequest, SummaryView};
use crate::nutrition::ledger::{Ledger, MealEntry};
use crate::session::services::{self, today};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/meals", get(list_meals).post(add_meal))
        .route("/meals/:id", delete(remove_meal))
        .route("/summary", get(summary))
        .route("/dashboard", get(dashboard))
}

#[instrument(skip(state))]
pub async fn list_meals(State(state): State<AppState>) -> Result<Json<Ledger>, (StatusCode, String)> {
    let mut slot = state.session.lock().await;
    let session = services::active(&state, &mut slot, today()).await?;
    Ok(Json(session.ledger().clone()))
}

#[instrument(skip(state, payload))]
pub async fn add_meal(
    State(state): State<AppState>,
    Json(payload): Json<AddMealRequest>,
) -> Result<(StatusCode, Json<MealEntry>), (StatusCode, String)> {
    let mut slot = state.session.lock().await;
    let session = services::active(&state, &mut slot, today()).await?;
    let mut draft = session.clone();
    let entry = draft.add_meal(payload.food, payload.meal_type, payload.servings)?;
    services::persist_ledger(&state, &draft).await?;
    *session = draft;
    info!(meal_id = %entry.id, food = %entry.food.name, "meal logged");
    Ok((StatusCode::CREATED, Json(entry)))
}

/// Removing an id that is not in the log is not an error.
#[instrument(skip(state))]
pub async fn remove_meal(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    let mut slot = state.session.lock().await;
    let session = services::active(&state, &mut slot, today()).await?;
    let mut draft = session.clone();
    if draft.remove_meal(id).is_some() {
        services::persist_ledger(&state, &draft).await?;
        *session = draft;
    }
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state))]
pub async fn summary(State(state): State<AppState>) -> Result<Json<SummaryView>, (StatusCode, String)> {
    let mut slot = state.session.lock().await;
    let session = services::active(&state, &mut slot, today()).await?;
    Ok(Json(SummaryView {
        date: session.ledger().date(),
        summary: session.summary(),
        goal: session.goal(),
        remaining: session.remaining(),
    }))
}

#[instrument(skip(state))]
pub async fn dashboard(State(state): State<AppState>) -> Result<Response, (StatusCode, String)> {
    let mut slot = state.session.lock().await;
    let session = services::active(&state, &mut slot, today()).await?;
    Ok(Json(session.dashboard()).into_response())
}
