//! Singleton profile row (id = 1)

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool};

use super::DbError;
use crate::models::ProfileInput;

const COLUMNS: &str = "name, title, tagline, bio, avatar_url, location, email, \
                       available_for_work, updated_at";

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub tagline: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub available_for_work: bool,
    pub updated_at: DateTime<Utc>,
}

pub struct ProfileRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ProfileRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// `NotFound` until the admin saves a profile for the first time.
    pub async fn get(&self) -> Result<Profile, DbError> {
        sqlx::query_as::<_, Profile>(&format!("SELECT {COLUMNS} FROM profile WHERE id = 1"))
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::NotFound {
                resource: "profile",
                id: "1".to_string(),
            })
    }

    pub async fn upsert(&self, input: &ProfileInput) -> Result<Profile, DbError> {
        let profile = sqlx::query_as::<_, Profile>(&format!(
            r#"
            INSERT INTO profile
                (id, name, title, tagline, bio, avatar_url, location, email, available_for_work)
            VALUES (1, $1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO UPDATE
            SET name = EXCLUDED.name,
                title = EXCLUDED.title,
                tagline = EXCLUDED.tagline,
                bio = EXCLUDED.bio,
                avatar_url = EXCLUDED.avatar_url,
                location = EXCLUDED.location,
                email = EXCLUDED.email,
                available_for_work = EXCLUDED.available_for_work,
                updated_at = NOW()
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&input.name)
        .bind(&input.title)
        .bind(input.tagline.as_deref())
        .bind(input.bio.as_deref())
        .bind(input.avatar_url.as_deref())
        .bind(input.location.as_deref())
        .bind(input.email.as_deref())
        .bind(input.available_for_work)
        .fetch_one(self.pool)
        .await?;

        Ok(profile)
    }
}
