use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::db::repos::{Social, SocialRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{AdminSession, JsonBody, ValidUuid};
use crate::http::server::AppState;
use crate::models::{SocialForm, SocialInput};

async fn list_socials(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Social>>, ApiError> {
    Ok(Json(SocialRepo::new(&state.pool).list().await?))
}

async fn admin_list_socials(
    _admin: AdminSession,
    state: State<Arc<AppState>>,
) -> Result<Json<Vec<Social>>, ApiError> {
    list_socials(state).await
}

async fn get_social(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    ValidUuid(id): ValidUuid,
) -> Result<Json<Social>, ApiError> {
    Ok(Json(SocialRepo::new(&state.pool).get(id).await?))
}

async fn create_social(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    JsonBody(form): JsonBody<SocialForm>,
) -> Result<(StatusCode, Json<Social>), ApiError> {
    let input = SocialInput::try_from(form)?;
    let social = SocialRepo::new(&state.pool).create(&input).await?;
    Ok((StatusCode::CREATED, Json(social)))
}

async fn update_social(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    ValidUuid(id): ValidUuid,
    JsonBody(form): JsonBody<SocialForm>,
) -> Result<Json<Social>, ApiError> {
    let input = SocialInput::try_from(form)?;
    Ok(Json(SocialRepo::new(&state.pool).update(id, &input).await?))
}

async fn delete_social(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    ValidUuid(id): ValidUuid,
) -> Result<StatusCode, ApiError> {
    SocialRepo::new(&state.pool).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/socials", get(list_socials))
}

pub fn admin_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/socials", get(admin_list_socials).post(create_social))
        .route(
            "/socials/{id}",
            get(get_social).put(update_social).delete(delete_social),
        )
}
