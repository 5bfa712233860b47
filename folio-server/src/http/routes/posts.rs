//! Blog post endpoints
//!
//! Public routes only ever see published posts. Admin routes see drafts too.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::db::repos::{Post, PostRepo, PostSummary};
use crate::http::error::ApiError;
use crate::http::extractors::{AdminSession, JsonBody, QueryParams, ValidUuid};
use crate::http::server::AppState;
use crate::models::{Paginated, Pagination, PaginationParams, PostForm, PostInput};

/// Query for the public listing.
///
/// Paging fields are spelled out rather than flattened; urlencoded
/// numbers don't survive `#[serde(flatten)]`.
#[derive(Debug, Default, Deserialize)]
pub struct PostListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub tag: Option<String>,
}

impl PostListQuery {
    fn pagination(&self) -> Pagination {
        PaginationParams {
            page: self.page,
            per_page: self.per_page,
        }
        .into()
    }
}

/// GET /api/posts?page=&per_page=&tag=
async fn list_posts(
    State(state): State<Arc<AppState>>,
    QueryParams(query): QueryParams<PostListQuery>,
) -> Result<Json<Paginated<PostSummary>>, ApiError> {
    let tag = query.tag.as_deref().map(str::trim).filter(|t| !t.is_empty());
    let page = PostRepo::new(&state.pool)
        .list_published(query.pagination(), tag)
        .await?;
    Ok(Json(page))
}

/// GET /api/posts/{slug}
async fn get_post_by_slug(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<Post>, ApiError> {
    Ok(Json(
        PostRepo::new(&state.pool).get_published_by_slug(&slug).await?,
    ))
}

/// GET /api/admin/posts (drafts included)
async fn admin_list_posts(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    QueryParams(params): QueryParams<PaginationParams>,
) -> Result<Json<Paginated<PostSummary>>, ApiError> {
    Ok(Json(PostRepo::new(&state.pool).list_all(params.into()).await?))
}

async fn get_post(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    ValidUuid(id): ValidUuid,
) -> Result<Json<Post>, ApiError> {
    Ok(Json(PostRepo::new(&state.pool).get(id).await?))
}

async fn create_post(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    JsonBody(form): JsonBody<PostForm>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    let input = PostInput::try_from(form)?;
    let post = PostRepo::new(&state.pool).create(&input).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// PUT /api/admin/posts/{id}
///
/// The first publish stamps `published_at`; later saves keep it.
async fn update_post(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    ValidUuid(id): ValidUuid,
    JsonBody(form): JsonBody<PostForm>,
) -> Result<Json<Post>, ApiError> {
    let input = PostInput::try_from(form)?;
    Ok(Json(PostRepo::new(&state.pool).update(id, &input).await?))
}

async fn delete_post(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    ValidUuid(id): ValidUuid,
) -> Result<StatusCode, ApiError> {
    PostRepo::new(&state.pool).delete(id).await?;
    tracing::info!(%id, "post deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/posts", get(list_posts))
        .route("/posts/{slug}", get(get_post_by_slug))
}

pub fn admin_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/posts", get(admin_list_posts).post(create_post))
        .route(
            "/posts/{id}",
            get(get_post).put(update_post).delete(delete_post),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::http::Uri;

    fn parse(uri: &'static str) -> PostListQuery {
        Query::<PostListQuery>::try_from_uri(&Uri::from_static(uri))
            .unwrap()
            .0
    }

    #[test]
    fn list_query_defaults_to_first_page() {
        let q = parse("/api/posts");
        assert_eq!(q.pagination(), Pagination::new(1, 20));
        assert!(q.tag.is_none());
    }

    #[test]
    fn list_query_clamps_per_page() {
        let q = parse("/api/posts?page=3&per_page=500&tag=rust");
        assert_eq!(q.pagination(), Pagination::new(3, 100));
        assert_eq!(q.tag.as_deref(), Some("rust"));
    }
}
