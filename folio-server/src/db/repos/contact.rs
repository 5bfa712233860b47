//! Contact form inbox

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::{ensure_affected, DbError};
use crate::models::{ContactInput, Paginated, Pagination};

const COLUMNS: &str = "id, name, email, subject, message, read, created_at";

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

pub struct ContactRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ContactRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, input: &ContactInput) -> Result<ContactMessage, DbError> {
        let message = sqlx::query_as::<_, ContactMessage>(&format!(
            r#"
            INSERT INTO contact_messages (name, email, subject, message)
            VALUES ($1, $2, $3, $4)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&input.name)
        .bind(&input.email)
        .bind(input.subject.as_deref())
        .bind(&input.message)
        .fetch_one(self.pool)
        .await?;

        Ok(message)
    }

    /// Newest first; `unread_only` hides messages already marked read.
    pub async fn list(
        &self,
        page: Pagination,
        unread_only: bool,
    ) -> Result<Paginated<ContactMessage>, DbError> {
        let items = sqlx::query_as::<_, ContactMessage>(&format!(
            r#"
            SELECT {COLUMNS}
            FROM contact_messages
            WHERE NOT ($3 AND read)
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#
        ))
        .bind(page.limit())
        .bind(page.offset())
        .bind(unread_only)
        .fetch_all(self.pool)
        .await?;

        let (total,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM contact_messages WHERE NOT ($1 AND read)")
                .bind(unread_only)
                .fetch_one(self.pool)
                .await?;

        Ok(Paginated::new(items, total, page))
    }

    pub async fn set_read(&self, id: Uuid, read: bool) -> Result<ContactMessage, DbError> {
        sqlx::query_as::<_, ContactMessage>(&format!(
            "UPDATE contact_messages SET read = $2 WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(read)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "message",
            id: id.to_string(),
        })
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM contact_messages WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;
        ensure_affected(result.rows_affected(), "message", id)
    }
}
