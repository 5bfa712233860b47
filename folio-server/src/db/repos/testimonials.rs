//! Testimonial repository

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::{ensure_affected, DbError};
use crate::models::TestimonialInput;

const COLUMNS: &str = "id, author_name, author_title, company, quote, avatar_url, rating, \
                       featured, display_order, created_at, updated_at";

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Testimonial {
    pub id: Uuid,
    pub author_name: String,
    pub author_title: Option<String>,
    pub company: Option<String>,
    pub quote: String,
    pub avatar_url: Option<String>,
    pub rating: Option<i16>,
    pub featured: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct TestimonialRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> TestimonialRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Featured first, then by display order.
    pub async fn list(&self) -> Result<Vec<Testimonial>, DbError> {
        let rows = sqlx::query_as::<_, Testimonial>(&format!(
            "SELECT {COLUMNS} FROM testimonials \
             ORDER BY featured DESC, display_order, created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get(&self, id: Uuid) -> Result<Testimonial, DbError> {
        sqlx::query_as::<_, Testimonial>(&format!(
            "SELECT {COLUMNS} FROM testimonials WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "testimonial",
            id: id.to_string(),
        })
    }

    pub async fn create(&self, input: &TestimonialInput) -> Result<Testimonial, DbError> {
        let row = sqlx::query_as::<_, Testimonial>(&format!(
            r#"
            INSERT INTO testimonials
                (author_name, author_title, company, quote, avatar_url, rating, featured, display_order)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&input.author_name)
        .bind(input.author_title.as_deref())
        .bind(input.company.as_deref())
        .bind(&input.quote)
        .bind(input.avatar_url.as_deref())
        .bind(input.rating)
        .bind(input.featured)
        .bind(input.display_order)
        .fetch_one(self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update(
        &self,
        id: Uuid,
        input: &TestimonialInput,
    ) -> Result<Testimonial, DbError> {
        sqlx::query_as::<_, Testimonial>(&format!(
            r#"
            UPDATE testimonials
            SET author_name = $2, author_title = $3, company = $4, quote = $5,
                avatar_url = $6, rating = $7, featured = $8, display_order = $9,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&input.author_name)
        .bind(input.author_title.as_deref())
        .bind(input.company.as_deref())
        .bind(&input.quote)
        .bind(input.avatar_url.as_deref())
        .bind(input.rating)
        .bind(input.featured)
        .bind(input.display_order)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "testimonial",
            id: id.to_string(),
        })
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;
        ensure_affected(result.rows_affected(), "testimonial", id)
    }
}
