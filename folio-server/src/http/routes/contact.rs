//! Contact form and the admin inbox

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;

use crate::db::repos::{ContactMessage, ContactRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{AdminSession, JsonBody, QueryParams, ValidUuid};
use crate::http::server::AppState;
use crate::models::{ContactForm, ContactInput, Paginated, PaginationParams};

#[derive(Debug, Default, Deserialize)]
pub struct InboxQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    /// Only messages not yet marked read
    #[serde(default)]
    pub unread: bool,
}

#[derive(Debug, Deserialize)]
pub struct MarkRead {
    pub read: bool,
}

/// POST /api/contact
async fn submit_contact(
    State(state): State<Arc<AppState>>,
    JsonBody(form): JsonBody<ContactForm>,
) -> Result<(StatusCode, Json<ContactMessage>), ApiError> {
    let input = ContactInput::try_from(form)?;
    let message = ContactRepo::new(&state.pool).create(&input).await?;
    tracing::info!(id = %message.id, "contact message received");
    Ok((StatusCode::CREATED, Json(message)))
}

/// GET /api/admin/messages?unread=
async fn list_messages(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    QueryParams(query): QueryParams<InboxQuery>,
) -> Result<Json<Paginated<ContactMessage>>, ApiError> {
    let page = PaginationParams {
        page: query.page,
        per_page: query.per_page,
    };
    let messages = ContactRepo::new(&state.pool)
        .list(page.into(), query.unread)
        .await?;
    Ok(Json(messages))
}

/// PUT /api/admin/messages/{id}/read
async fn mark_message(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    ValidUuid(id): ValidUuid,
    JsonBody(body): JsonBody<MarkRead>,
) -> Result<Json<ContactMessage>, ApiError> {
    Ok(Json(
        ContactRepo::new(&state.pool).set_read(id, body.read).await?,
    ))
}

async fn delete_message(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    ValidUuid(id): ValidUuid,
) -> Result<StatusCode, ApiError> {
    ContactRepo::new(&state.pool).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/contact", post(submit_contact))
}

pub fn admin_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/messages", get(list_messages))
        .route("/messages/{id}", delete(delete_message))
        .route("/messages/{id}/read", put(mark_message))
}
