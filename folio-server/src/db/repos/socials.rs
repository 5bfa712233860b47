//! Social link repository

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::{ensure_affected, DbError};
use crate::models::SocialInput;

const COLUMNS: &str = "id, platform, url, icon, display_order, created_at, updated_at";

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Social {
    pub id: Uuid,
    pub platform: String,
    pub url: String,
    pub icon: Option<String>,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct SocialRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> SocialRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Social>, DbError> {
        let rows = sqlx::query_as::<_, Social>(&format!(
            "SELECT {COLUMNS} FROM socials ORDER BY display_order, platform"
        ))
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get(&self, id: Uuid) -> Result<Social, DbError> {
        sqlx::query_as::<_, Social>(&format!("SELECT {COLUMNS} FROM socials WHERE id = $1"))
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::NotFound {
                resource: "social",
                id: id.to_string(),
            })
    }

    pub async fn create(&self, input: &SocialInput) -> Result<Social, DbError> {
        let row = sqlx::query_as::<_, Social>(&format!(
            r#"
            INSERT INTO socials (platform, url, icon, display_order)
            VALUES ($1, $2, $3, $4)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&input.platform)
        .bind(&input.url)
        .bind(input.icon.as_deref())
        .bind(input.display_order)
        .fetch_one(self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update(&self, id: Uuid, input: &SocialInput) -> Result<Social, DbError> {
        sqlx::query_as::<_, Social>(&format!(
            r#"
            UPDATE socials
            SET platform = $2, url = $3, icon = $4, display_order = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&input.platform)
        .bind(&input.url)
        .bind(input.icon.as_deref())
        .bind(input.display_order)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "social",
            id: id.to_string(),
        })
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM socials WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;
        ensure_affected(result.rows_affected(), "social", id)
    }
}
