use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use super::dto::{GoalView, LoginRequest, ProfileView, SignupRequest};
use super::profile::ProfileUpdate;
use super::services::{self, today};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/session/signup", post(signup))
        .route("/session/login", post(login))
        .route("/session/logout", post(logout))
        .route("/profile", get(get_profile).patch(update_profile))
        .route("/goal", get(get_goal))
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<(StatusCode, Json<ProfileView>), (StatusCode, String)> {
    let session =
        services::signup(&state, &payload.name, &payload.email, payload.goal, today()).await?;
    let view = ProfileView::from(&session);
    *state.session.lock().await = Some(session);
    Ok((StatusCode::CREATED, Json(view)))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<ProfileView>, (StatusCode, String)> {
    let session = services::login(&state, &payload.email, today()).await?;
    info!(user_id = %session.user_id(), "user logged in");
    let view = ProfileView::from(&session);
    *state.session.lock().await = Some(session);
    Ok(Json(view))
}

#[instrument(skip(state))]
pub async fn logout(State(state): State<AppState>) -> StatusCode {
    if let Some(session) = state.session.lock().await.take() {
        info!(user_id = %session.user_id(), "user logged out");
    }
    StatusCode::NO_CONTENT
}

#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
) -> Result<Json<ProfileView>, (StatusCode, String)> {
    let mut slot = state.session.lock().await;
    let session = services::active(&state, &mut slot, today()).await?;
    Ok(Json(ProfileView::from(&*session)))
}

#[instrument(skip(state, update))]
pub async fn update_profile(
    State(state): State<AppState>,
    Json(update): Json<ProfileUpdate>,
) -> Result<Json<ProfileView>, (StatusCode, String)> {
    let mut slot = state.session.lock().await;
    let session = services::active(&state, &mut slot, today()).await?;
    let mut draft = session.clone();
    draft.update_profile(update)?;
    services::persist_user(&state, &draft).await?;
    *session = draft;
    Ok(Json(ProfileView::from(&*session)))
}

#[instrument(skip(state))]
pub async fn get_goal(State(state): State<AppState>) -> Result<Json<GoalView>, (StatusCode, String)> {
    let mut slot = state.session.lock().await;
    let session = services::active(&state, &mut slot, today()).await?;
    Ok(Json(GoalView {
        goal: session.profile().goal,
        tdee: session.profile().tdee(),
        targets: session.goal(),
    }))
}
