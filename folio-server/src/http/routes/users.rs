use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};

use crate::db::repos::{User, UserRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{AdminSession, JsonBody, ValidUuid};
use crate::http::server::AppState;
use crate::models::{UserForm, UserInput};

async fn list_users(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(UserRepo::new(&state.pool).list().await?))
}

/// POST /api/admin/users (email taken → 409)
async fn create_user(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    JsonBody(form): JsonBody<UserForm>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let input = UserInput::try_from(form)?;
    let user = UserRepo::new(&state.pool).create(&input).await?;
    tracing::info!(id = %user.id, role = %input.role.as_str(), "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

async fn delete_user(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    ValidUuid(id): ValidUuid,
) -> Result<StatusCode, ApiError> {
    UserRepo::new(&state.pool).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn admin_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", delete(delete_user))
}
