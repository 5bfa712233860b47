//! Site owner profile (hero + about sections)

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, put},
    Json, Router,
};

use crate::db::repos::{Profile, ProfileRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{AdminSession, JsonBody};
use crate::http::server::AppState;
use crate::models::{ProfileForm, ProfileInput};

/// GET /api/profile
async fn get_profile(State(state): State<Arc<AppState>>) -> Result<Json<Profile>, ApiError> {
    Ok(Json(ProfileRepo::new(&state.pool).get().await?))
}

/// PUT /api/admin/profile
///
/// Creates the profile on first save, replaces it afterwards.
async fn put_profile(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    JsonBody(form): JsonBody<ProfileForm>,
) -> Result<Json<Profile>, ApiError> {
    let input = ProfileInput::try_from(form)?;
    let profile = ProfileRepo::new(&state.pool).upsert(&input).await?;
    tracing::info!(name = %profile.name, "profile saved");
    Ok(Json(profile))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/profile", get(get_profile))
}

pub fn admin_router() -> Router<Arc<AppState>> {
    Router::new().route("/profile", put(put_profile))
}
