//! Experience repository

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::{ensure_affected, DbError};
use crate::models::ExperienceInput;

const COLUMNS: &str = "id, company, role, location, start_date, end_date, description, \
                       highlights, display_order, created_at, updated_at";

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Experience {
    pub id: Uuid,
    pub company: String,
    pub role: String,
    pub location: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: String,
    pub highlights: Vec<String>,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Experience {
    pub fn is_current(&self) -> bool {
        self.end_date.is_none()
    }
}

pub struct ExperienceRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ExperienceRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Current positions first, then most recent start date.
    pub async fn list(&self) -> Result<Vec<Experience>, DbError> {
        let rows = sqlx::query_as::<_, Experience>(&format!(
            r#"
            SELECT {COLUMNS}
            FROM experiences
            ORDER BY (end_date IS NULL) DESC, start_date DESC, display_order
            "#
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn get(&self, id: Uuid) -> Result<Experience, DbError> {
        sqlx::query_as::<_, Experience>(&format!(
            "SELECT {COLUMNS} FROM experiences WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "experience",
            id: id.to_string(),
        })
    }

    pub async fn create(&self, input: &ExperienceInput) -> Result<Experience, DbError> {
        let row = sqlx::query_as::<_, Experience>(&format!(
            r#"
            INSERT INTO experiences
                (company, role, location, start_date, end_date, description, highlights,
                 display_order)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&input.company)
        .bind(&input.role)
        .bind(input.location.as_deref())
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(&input.description)
        .bind(&input.highlights)
        .bind(input.display_order)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    pub async fn update(&self, id: Uuid, input: &ExperienceInput) -> Result<Experience, DbError> {
        sqlx::query_as::<_, Experience>(&format!(
            r#"
            UPDATE experiences
            SET company = $2, role = $3, location = $4, start_date = $5, end_date = $6,
                description = $7, highlights = $8, display_order = $9, updated_at = NOW()
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&input.company)
        .bind(&input.role)
        .bind(input.location.as_deref())
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(&input.description)
        .bind(&input.highlights)
        .bind(input.display_order)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "experience",
            id: id.to_string(),
        })
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM experiences WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;
        ensure_affected(result.rows_affected(), "experience", id)
    }
}
