//! AI drafting endpoints
//!
//! Both routes validate the request, make a single LLM call and return the
//! parsed JSON. Without a configured client they answer 500.

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};

use crate::ai::{self, BlogDraft, BlogDraftRequest, LlmClient, LlmError, SeoRequest, SeoSuggestion};
use crate::http::error::ApiError;
use crate::http::extractors::{AdminSession, JsonBody};
use crate::http::server::AppState;

fn client(state: &AppState) -> Result<&dyn LlmClient, LlmError> {
    state.llm.as_deref().ok_or(LlmError::NotConfigured)
}

/// POST /api/admin/ai/blog-draft
async fn blog_draft(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<BlogDraftRequest>,
) -> Result<Json<BlogDraft>, ApiError> {
    req.validate()?;
    let draft = ai::draft_blog_post(client(&state)?, &req).await?;
    tracing::info!(title = %draft.title, "blog draft generated");
    Ok(Json(draft))
}

/// POST /api/admin/ai/seo
async fn seo(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<SeoRequest>,
) -> Result<Json<SeoSuggestion>, ApiError> {
    req.validate()?;
    Ok(Json(ai::suggest_seo(client(&state)?, &req).await?))
}

pub fn admin_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ai/blog-draft", post(blog_draft))
        .route("/ai/seo", post(seo))
}
