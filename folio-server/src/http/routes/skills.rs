//! Skill endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::db::repos::{Skill, SkillRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{AdminSession, JsonBody, QueryParams, ValidUuid};
use crate::http::server::AppState;
use crate::models::{SkillForm, SkillInput};

#[derive(Debug, Default, Deserialize)]
pub struct SkillFilter {
    pub category: Option<String>,
}

/// GET /api/skills?category=
async fn list_skills(
    State(state): State<Arc<AppState>>,
    QueryParams(filter): QueryParams<SkillFilter>,
) -> Result<Json<Vec<Skill>>, ApiError> {
    let category = filter.category.as_deref().map(str::trim).filter(|c| !c.is_empty());
    let skills = SkillRepo::new(&state.pool).list(category).await?;
    Ok(Json(skills))
}

/// GET /api/admin/skills/{id}
async fn get_skill(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    ValidUuid(id): ValidUuid,
) -> Result<Json<Skill>, ApiError> {
    Ok(Json(SkillRepo::new(&state.pool).get(id).await?))
}

/// POST /api/admin/skills
async fn create_skill(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    JsonBody(form): JsonBody<SkillForm>,
) -> Result<(StatusCode, Json<Skill>), ApiError> {
    let input = SkillInput::try_from(form)?;
    let skill = SkillRepo::new(&state.pool).create(&input).await?;
    tracing::info!(id = %skill.id, name = %skill.name, "skill created");
    Ok((StatusCode::CREATED, Json(skill)))
}

/// PUT /api/admin/skills/{id}
async fn update_skill(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    ValidUuid(id): ValidUuid,
    JsonBody(form): JsonBody<SkillForm>,
) -> Result<Json<Skill>, ApiError> {
    let input = SkillInput::try_from(form)?;
    Ok(Json(SkillRepo::new(&state.pool).update(id, &input).await?))
}

/// DELETE /api/admin/skills/{id}
async fn delete_skill(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    ValidUuid(id): ValidUuid,
) -> Result<StatusCode, ApiError> {
    SkillRepo::new(&state.pool).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn admin_list_skills(
    _admin: AdminSession,
    state: State<Arc<AppState>>,
    filter: QueryParams<SkillFilter>,
) -> Result<Json<Vec<Skill>>, ApiError> {
    list_skills(state, filter).await
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/skills", get(list_skills))
}

pub fn admin_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/skills", get(admin_list_skills).post(create_skill))
        .route(
            "/skills/{id}",
            get(get_skill).put(update_skill).delete(delete_skill),
        )
}
