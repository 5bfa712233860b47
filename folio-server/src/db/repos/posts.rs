//! Blog post repository
//!
//! - public reads only ever see `published = TRUE`
//! - `published_at` is stamped on first publish and kept afterwards
//! - list totals come from a separate `COUNT(*)` with the same filter

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::{ensure_affected, DbError};
use crate::models::{Paginated, Pagination, PostInput};

const COLUMNS: &str = "id, title, slug, excerpt, content, cover_image, tags, published, \
                       published_at, seo_title, seo_description, created_at, updated_at";

const SUMMARY_COLUMNS: &str = "id, title, slug, excerpt, cover_image, tags, published, \
                               published_at, created_at, updated_at";

/// Full post record
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub cover_image: Option<String>,
    pub tags: Vec<String>,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Post without its body, for list views
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PostSummary {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub cover_image: Option<String>,
    pub tags: Vec<String>,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct PostRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PostRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Published posts, newest first, optionally carrying `tag`.
    pub async fn list_published(
        &self,
        page: Pagination,
        tag: Option<&str>,
    ) -> Result<Paginated<PostSummary>, DbError> {
        let items = sqlx::query_as::<_, PostSummary>(&format!(
            r#"
            SELECT {SUMMARY_COLUMNS}
            FROM posts
            WHERE published AND ($3::text IS NULL OR $3 = ANY(tags))
            ORDER BY published_at DESC, created_at DESC
            LIMIT $1 OFFSET $2
            "#
        ))
        .bind(page.limit())
        .bind(page.offset())
        .bind(tag)
        .fetch_all(self.pool)
        .await?;

        let (total,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM posts WHERE published AND ($1::text IS NULL OR $1 = ANY(tags))",
        )
        .bind(tag)
        .fetch_one(self.pool)
        .await?;

        Ok(Paginated::new(items, total, page))
    }

    /// Every post including drafts, most recently edited first.
    pub async fn list_all(&self, page: Pagination) -> Result<Paginated<PostSummary>, DbError> {
        let items = sqlx::query_as::<_, PostSummary>(&format!(
            "SELECT {SUMMARY_COLUMNS} FROM posts ORDER BY updated_at DESC LIMIT $1 OFFSET $2"
        ))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await?;

        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM posts")
            .fetch_one(self.pool)
            .await?;

        Ok(Paginated::new(items, total, page))
    }

    pub async fn get(&self, id: Uuid) -> Result<Post, DbError> {
        sqlx::query_as::<_, Post>(&format!("SELECT {COLUMNS} FROM posts WHERE id = $1"))
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::NotFound {
                resource: "post",
                id: id.to_string(),
            })
    }

    /// Drafts are reported as not found.
    pub async fn get_published_by_slug(&self, slug: &str) -> Result<Post, DbError> {
        sqlx::query_as::<_, Post>(&format!(
            "SELECT {COLUMNS} FROM posts WHERE slug = $1 AND published"
        ))
        .bind(slug)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "post",
            id: slug.to_owned(),
        })
    }

    pub async fn create(&self, input: &PostInput) -> Result<Post, DbError> {
        let post = sqlx::query_as::<_, Post>(&format!(
            r#"
            INSERT INTO posts
                (title, slug, excerpt, content, cover_image, tags, published, published_at,
                 seo_title, seo_description)
            VALUES ($1, $2, $3, $4, $5, $6, $7, CASE WHEN $7 THEN NOW() END, $8, $9)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&input.title)
        .bind(&input.slug)
        .bind(input.excerpt.as_deref())
        .bind(&input.content)
        .bind(input.cover_image.as_deref())
        .bind(&input.tags)
        .bind(input.published)
        .bind(input.seo_title.as_deref())
        .bind(input.seo_description.as_deref())
        .fetch_one(self.pool)
        .await?;

        tracing::info!(slug = %post.slug, published = post.published, "post created");
        Ok(post)
    }

    pub async fn update(&self, id: Uuid, input: &PostInput) -> Result<Post, DbError> {
        sqlx::query_as::<_, Post>(&format!(
            r#"
            UPDATE posts
            SET title = $2, slug = $3, excerpt = $4, content = $5, cover_image = $6,
                tags = $7, published = $8,
                published_at = CASE WHEN $8 THEN COALESCE(published_at, NOW())
                                    ELSE published_at END,
                seo_title = $9, seo_description = $10, updated_at = NOW()
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&input.title)
        .bind(&input.slug)
        .bind(input.excerpt.as_deref())
        .bind(&input.content)
        .bind(input.cover_image.as_deref())
        .bind(&input.tags)
        .bind(input.published)
        .bind(input.seo_title.as_deref())
        .bind(input.seo_description.as_deref())
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "post",
            id: id.to_string(),
        })
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;
        ensure_affected(result.rows_affected(), "post", id)
    }
}

