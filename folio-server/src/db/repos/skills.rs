//! Skill repository

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::{ensure_affected, DbError};
use crate::models::SkillInput;

const COLUMNS: &str = "id, name, category, proficiency, icon, display_order, created_at, updated_at";

/// Skill record from database
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub proficiency: i16,
    pub icon: Option<String>,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct SkillRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> SkillRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List skills grouped by category, optionally for one category only.
    pub async fn list(&self, category: Option<&str>) -> Result<Vec<Skill>, DbError> {
        let skills = sqlx::query_as::<_, Skill>(&format!(
            r#"
            SELECT {COLUMNS}
            FROM skills
            WHERE ($1::text IS NULL OR category = $1)
            ORDER BY category, display_order, name
            "#
        ))
        .bind(category)
        .fetch_all(self.pool)
        .await?;

        Ok(skills)
    }

    pub async fn get(&self, id: Uuid) -> Result<Skill, DbError> {
        sqlx::query_as::<_, Skill>(&format!("SELECT {COLUMNS} FROM skills WHERE id = $1"))
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::NotFound {
                resource: "skill",
                id: id.to_string(),
            })
    }

    pub async fn create(&self, input: &SkillInput) -> Result<Skill, DbError> {
        let skill = sqlx::query_as::<_, Skill>(&format!(
            r#"
            INSERT INTO skills (name, category, proficiency, icon, display_order)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&input.name)
        .bind(&input.category)
        .bind(input.proficiency.value())
        .bind(input.icon.as_deref())
        .bind(input.display_order)
        .fetch_one(self.pool)
        .await?;

        Ok(skill)
    }

    pub async fn update(&self, id: Uuid, input: &SkillInput) -> Result<Skill, DbError> {
        sqlx::query_as::<_, Skill>(&format!(
            r#"
            UPDATE skills
            SET name = $2, category = $3, proficiency = $4, icon = $5,
                display_order = $6, updated_at = NOW()
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&input.name)
        .bind(&input.category)
        .bind(input.proficiency.value())
        .bind(input.icon.as_deref())
        .bind(input.display_order)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "skill",
            id: id.to_string(),
        })
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM skills WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;
        ensure_affected(result.rows_affected(), "skill", id)
    }
}
