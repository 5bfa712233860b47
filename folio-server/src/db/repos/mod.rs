//! Repository implementations, one per table
//!
//! Each repository borrows the pool, validates nothing (inputs arrive as
//! validated `*Input` models) and maps a missing row to `DbError::NotFound`.

pub mod skills;
pub mod projects;
pub mod experience;
pub mod posts;
pub mod socials;
pub mod testimonials;
pub mod profile;
pub mod resumes;
pub mod contact;
pub mod users;

pub use skills::{Skill, SkillRepo};
pub use projects::{Project, ProjectRepo};
pub use experience::{Experience, ExperienceRepo};
pub use posts::{Post, PostRepo, PostSummary};
pub use socials::{Social, SocialRepo};
pub use testimonials::{Testimonial, TestimonialRepo};
pub use profile::{Profile, ProfileRepo};
pub use resumes::{Resume, ResumeRepo};
pub use contact::{ContactMessage, ContactRepo};
pub use users::{User, UserRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    /// A unique constraint rejected the write (duplicate slug, email, ...)
    #[error("conflict: {0}")]
    Conflict(String),
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &e {
            if db.is_unique_violation() {
                let what = db
                    .constraint()
                    .map(|c| format!("value violates {}", c))
                    .unwrap_or_else(|| "duplicate value".to_string());
                return Self::Conflict(what);
            }
        }
        Self::Sqlx(e)
    }
}

/// Turn `rows_affected() == 0` into a NotFound for `resource`.
pub(crate) fn ensure_affected(
    rows: u64,
    resource: &'static str,
    id: impl ToString,
) -> Result<(), DbError> {
    if rows == 0 {
        Err(DbError::NotFound {
            resource,
            id: id.to_string(),
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_rows_is_not_found() {
        let err = ensure_affected(0, "skill", "abc").unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "skill", .. }));
        assert!(ensure_affected(1, "skill", "abc").is_ok());
    }

    #[test]
    fn row_not_found_stays_sqlx() {
        let err = DbError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, DbError::Sqlx(_)));
    }
}
