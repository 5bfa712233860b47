//! Resume metadata; the bytes live in the uploads directory

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::DbError;
use crate::models::ResumeKind;

const COLUMNS: &str = "id, filename, content_type, size_bytes, stored_name, uploaded_at";

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Resume {
    pub id: Uuid,
    /// Name the file was uploaded with, offered back on download
    pub filename: String,
    pub content_type: String,
    pub size_bytes: i64,
    /// File name inside the uploads directory
    #[serde(skip_serializing)]
    pub stored_name: String,
    pub uploaded_at: DateTime<Utc>,
}

pub struct ResumeRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ResumeRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(
        &self,
        filename: &str,
        kind: ResumeKind,
        size_bytes: i64,
        stored_name: &str,
    ) -> Result<Resume, DbError> {
        let resume = sqlx::query_as::<_, Resume>(&format!(
            r#"
            INSERT INTO resumes (filename, content_type, size_bytes, stored_name)
            VALUES ($1, $2, $3, $4)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(filename)
        .bind(kind.mime())
        .bind(size_bytes)
        .bind(stored_name)
        .fetch_one(self.pool)
        .await?;

        Ok(resume)
    }

    /// The most recent upload is the one the site offers.
    pub async fn current(&self) -> Result<Resume, DbError> {
        sqlx::query_as::<_, Resume>(&format!(
            "SELECT {COLUMNS} FROM resumes ORDER BY uploaded_at DESC LIMIT 1"
        ))
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "resume",
            id: "current".to_string(),
        })
    }

    pub async fn list(&self) -> Result<Vec<Resume>, DbError> {
        let rows = sqlx::query_as::<_, Resume>(&format!(
            "SELECT {COLUMNS} FROM resumes ORDER BY uploaded_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    /// Delete and return the row so the caller can remove the stored file.
    pub async fn delete(&self, id: Uuid) -> Result<Resume, DbError> {
        sqlx::query_as::<_, Resume>(&format!(
            "DELETE FROM resumes WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "resume",
            id: id.to_string(),
        })
    }
}
