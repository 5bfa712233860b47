use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::db::repos::{Testimonial, TestimonialRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{AdminSession, JsonBody, ValidUuid};
use crate::http::server::AppState;
use crate::models::{TestimonialForm, TestimonialInput};

/// GET /api/testimonials
async fn list_testimonials(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Testimonial>>, ApiError> {
    Ok(Json(TestimonialRepo::new(&state.pool).list().await?))
}

async fn admin_list_testimonials(
    _admin: AdminSession,
    state: State<Arc<AppState>>,
) -> Result<Json<Vec<Testimonial>>, ApiError> {
    list_testimonials(state).await
}

async fn get_testimonial(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    ValidUuid(id): ValidUuid,
) -> Result<Json<Testimonial>, ApiError> {
    Ok(Json(TestimonialRepo::new(&state.pool).get(id).await?))
}

async fn create_testimonial(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    JsonBody(form): JsonBody<TestimonialForm>,
) -> Result<(StatusCode, Json<Testimonial>), ApiError> {
    let input = TestimonialInput::try_from(form)?;
    let testimonial = TestimonialRepo::new(&state.pool).create(&input).await?;
    Ok((StatusCode::CREATED, Json(testimonial)))
}

async fn update_testimonial(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    ValidUuid(id): ValidUuid,
    JsonBody(form): JsonBody<TestimonialForm>,
) -> Result<Json<Testimonial>, ApiError> {
    let input = TestimonialInput::try_from(form)?;
    Ok(Json(
        TestimonialRepo::new(&state.pool).update(id, &input).await?,
    ))
}

async fn delete_testimonial(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    ValidUuid(id): ValidUuid,
) -> Result<StatusCode, ApiError> {
    TestimonialRepo::new(&state.pool).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/testimonials", get(list_testimonials))
}

pub fn admin_router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/testimonials",
            get(admin_list_testimonials).post(create_testimonial),
        )
        .route(
            "/testimonials/{id}",
            get(get_testimonial)
                .put(update_testimonial)
                .delete(delete_testimonial),
        )
}
