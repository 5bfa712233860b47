//! Work history endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::db::repos::{Experience, ExperienceRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{AdminSession, JsonBody, ValidUuid};
use crate::http::server::AppState;
use crate::models::{ExperienceForm, ExperienceInput};

/// GET /api/experience (current positions first)
async fn list_experience(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Experience>>, ApiError> {
    Ok(Json(ExperienceRepo::new(&state.pool).list().await?))
}

async fn admin_list_experience(
    _admin: AdminSession,
    state: State<Arc<AppState>>,
) -> Result<Json<Vec<Experience>>, ApiError> {
    list_experience(state).await
}

async fn get_experience(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    ValidUuid(id): ValidUuid,
) -> Result<Json<Experience>, ApiError> {
    Ok(Json(ExperienceRepo::new(&state.pool).get(id).await?))
}

async fn create_experience(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    JsonBody(form): JsonBody<ExperienceForm>,
) -> Result<(StatusCode, Json<Experience>), ApiError> {
    let input = ExperienceInput::try_from(form)?;
    let entry = ExperienceRepo::new(&state.pool).create(&input).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

async fn update_experience(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    ValidUuid(id): ValidUuid,
    JsonBody(form): JsonBody<ExperienceForm>,
) -> Result<Json<Experience>, ApiError> {
    let input = ExperienceInput::try_from(form)?;
    Ok(Json(ExperienceRepo::new(&state.pool).update(id, &input).await?))
}

async fn delete_experience(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    ValidUuid(id): ValidUuid,
) -> Result<StatusCode, ApiError> {
    ExperienceRepo::new(&state.pool).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/experience", get(list_experience))
}

pub fn admin_router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/experience",
            get(admin_list_experience).post(create_experience),
        )
        .route(
            "/experience/{id}",
            get(get_experience)
                .put(update_experience)
                .delete(delete_experience),
        )
}
