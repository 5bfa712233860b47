//! Project endpoints
//!
//! Public reads go by slug; admin writes go by id.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::db::repos::{Project, ProjectRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{AdminSession, JsonBody, QueryParams, ValidUuid};
use crate::http::server::AppState;
use crate::models::{ProjectForm, ProjectInput};

#[derive(Debug, Default, Deserialize)]
pub struct ProjectFilter {
    pub featured: Option<bool>,
}

/// GET /api/projects?featured=
async fn list_projects(
    State(state): State<Arc<AppState>>,
    QueryParams(filter): QueryParams<ProjectFilter>,
) -> Result<Json<Vec<Project>>, ApiError> {
    let projects = ProjectRepo::new(&state.pool).list(filter.featured).await?;
    Ok(Json(projects))
}

/// GET /api/projects/{slug}
async fn get_project_by_slug(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<Project>, ApiError> {
    Ok(Json(ProjectRepo::new(&state.pool).get_by_slug(&slug).await?))
}

async fn admin_list_projects(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Project>>, ApiError> {
    Ok(Json(ProjectRepo::new(&state.pool).list(None).await?))
}

async fn get_project(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    ValidUuid(id): ValidUuid,
) -> Result<Json<Project>, ApiError> {
    Ok(Json(ProjectRepo::new(&state.pool).get(id).await?))
}

/// POST /api/admin/projects
///
/// Slug is derived from the title when not supplied; a taken slug is a 409.
async fn create_project(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    JsonBody(form): JsonBody<ProjectForm>,
) -> Result<(StatusCode, Json<Project>), ApiError> {
    let input = ProjectInput::try_from(form)?;
    let project = ProjectRepo::new(&state.pool).create(&input).await?;
    tracing::info!(id = %project.id, slug = %project.slug, "project created");
    Ok((StatusCode::CREATED, Json(project)))
}

async fn update_project(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    ValidUuid(id): ValidUuid,
    JsonBody(form): JsonBody<ProjectForm>,
) -> Result<Json<Project>, ApiError> {
    let input = ProjectInput::try_from(form)?;
    Ok(Json(ProjectRepo::new(&state.pool).update(id, &input).await?))
}

async fn delete_project(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    ValidUuid(id): ValidUuid,
) -> Result<StatusCode, ApiError> {
    ProjectRepo::new(&state.pool).delete(id).await?;
    tracing::info!(%id, "project deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/projects", get(list_projects))
        .route("/projects/{slug}", get(get_project_by_slug))
}

pub fn admin_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/projects", get(admin_list_projects).post(create_project))
        .route(
            "/projects/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
}
