//! Project repository
//!
//! Public listing puts featured work first, then the admin-chosen order.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::{ensure_affected, DbError};
use crate::models::ProjectInput;

const COLUMNS: &str = "id, title, slug, description, tech_stack, image_url, live_url, repo_url, \
                       featured, display_order, created_at, updated_at";

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub image_url: Option<String>,
    pub live_url: Option<String>,
    pub repo_url: Option<String>,
    pub featured: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct ProjectRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ProjectRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, featured: Option<bool>) -> Result<Vec<Project>, DbError> {
        let projects = sqlx::query_as::<_, Project>(&format!(
            r#"
            SELECT {COLUMNS}
            FROM projects
            WHERE ($1::boolean IS NULL OR featured = $1)
            ORDER BY featured DESC, display_order, created_at DESC
            "#
        ))
        .bind(featured)
        .fetch_all(self.pool)
        .await?;

        Ok(projects)
    }

    pub async fn get(&self, id: Uuid) -> Result<Project, DbError> {
        sqlx::query_as::<_, Project>(&format!("SELECT {COLUMNS} FROM projects WHERE id = $1"))
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::NotFound {
                resource: "project",
                id: id.to_string(),
            })
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Project, DbError> {
        sqlx::query_as::<_, Project>(&format!("SELECT {COLUMNS} FROM projects WHERE slug = $1"))
            .bind(slug)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::NotFound {
                resource: "project",
                id: slug.to_owned(),
            })
    }

    pub async fn create(&self, input: &ProjectInput) -> Result<Project, DbError> {
        let project = sqlx::query_as::<_, Project>(&format!(
            r#"
            INSERT INTO projects
                (title, slug, description, tech_stack, image_url, live_url, repo_url,
                 featured, display_order)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&input.title)
        .bind(&input.slug)
        .bind(&input.description)
        .bind(&input.tech_stack)
        .bind(input.image_url.as_deref())
        .bind(input.live_url.as_deref())
        .bind(input.repo_url.as_deref())
        .bind(input.featured)
        .bind(input.display_order)
        .fetch_one(self.pool)
        .await?;

        Ok(project)
    }

    pub async fn update(&self, id: Uuid, input: &ProjectInput) -> Result<Project, DbError> {
        sqlx::query_as::<_, Project>(&format!(
            r#"
            UPDATE projects
            SET title = $2, slug = $3, description = $4, tech_stack = $5, image_url = $6,
                live_url = $7, repo_url = $8, featured = $9, display_order = $10,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&input.title)
        .bind(&input.slug)
        .bind(&input.description)
        .bind(&input.tech_stack)
        .bind(input.image_url.as_deref())
        .bind(input.live_url.as_deref())
        .bind(input.repo_url.as_deref())
        .bind(input.featured)
        .bind(input.display_order)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "project",
            id: id.to_string(),
        })
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;
        ensure_affected(result.rows_affected(), "project", id)
    }
}
