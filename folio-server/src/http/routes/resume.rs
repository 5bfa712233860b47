//! Resume upload and download
//!
//! Files are written to the uploads directory as `<uuid>.<ext>`; the
//! database only keeps metadata. The newest upload is the one served.

use std::io::ErrorKind;
use std::sync::Arc;

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        DefaultBodyLimit, Multipart, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::db::repos::{Resume, ResumeRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{AdminSession, ValidUuid};
use crate::http::server::AppState;
use crate::models::{sanitize_filename, ResumeKind, ValidationError};

/// Room for multipart boundaries and headers on top of the file itself
const MULTIPART_OVERHEAD: u64 = 64 * 1024;

const FILE_FIELD: &str = "file";

/// GET /api/resume
async fn current_resume(State(state): State<Arc<AppState>>) -> Result<Json<Resume>, ApiError> {
    Ok(Json(ResumeRepo::new(&state.pool).current().await?))
}

/// GET /api/resume/file
async fn download_resume(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let resume = ResumeRepo::new(&state.pool).current().await?;
    let path = state.uploads.dir.join(&resume.stored_name);

    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::error!(path = %path.display(), "resume row exists but file is missing");
            return Err(ApiError::NotFound {
                resource: "resume file",
                id: resume.id.to_string(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    let disposition = format!("attachment; filename=\"{}\"", resume.filename);
    Ok((
        [
            (header::CONTENT_TYPE, resume.content_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    ))
}

fn multipart_error(e: MultipartError, max_bytes: u64) -> ApiError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge { max_bytes }
    } else {
        ApiError::bad_request(e.body_text())
    }
}

/// POST /api/admin/resume (multipart, field `file`)
async fn upload_resume(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<Resume>), ApiError> {
    let max_bytes = state.uploads.max_resume_bytes;
    let mut multipart = multipart.map_err(|e| ApiError::bad_request(e.body_text()))?;

    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, max_bytes))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = sanitize_filename(field.file_name().unwrap_or("resume"));
        let kind = ResumeKind::detect(field.content_type(), &filename)?;
        let data = field
            .bytes()
            .await
            .map_err(|e| multipart_error(e, max_bytes))?;

        upload = Some((filename, kind, data));
        break;
    }

    let Some((filename, kind, data)) = upload else {
        return Err(ValidationError::Empty { field: FILE_FIELD }.into());
    };
    if data.is_empty() {
        return Err(ValidationError::Empty { field: FILE_FIELD }.into());
    }
    if data.len() as u64 > max_bytes {
        return Err(ApiError::PayloadTooLarge { max_bytes });
    }

    tokio::fs::create_dir_all(&state.uploads.dir).await?;
    let stored_name = format!("{}.{}", Uuid::new_v4(), kind.extension());
    let path = state.uploads.dir.join(&stored_name);
    tokio::fs::write(&path, &data).await?;

    let inserted = ResumeRepo::new(&state.pool)
        .insert(&filename, kind, data.len() as i64, &stored_name)
        .await;

    match inserted {
        Ok(resume) => {
            tracing::info!(id = %resume.id, filename = %resume.filename, size = resume.size_bytes, "resume uploaded");
            Ok((StatusCode::CREATED, Json(resume)))
        }
        Err(e) => {
            if let Err(rm) = tokio::fs::remove_file(&path).await {
                tracing::warn!(path = %path.display(), error = %rm, "failed to remove orphaned upload");
            }
            Err(e.into())
        }
    }
}

async fn list_resumes(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Resume>>, ApiError> {
    Ok(Json(ResumeRepo::new(&state.pool).list().await?))
}

/// DELETE /api/admin/resumes/{id}
async fn delete_resume(
    _admin: AdminSession,
    State(state): State<Arc<AppState>>,
    ValidUuid(id): ValidUuid,
) -> Result<StatusCode, ApiError> {
    let resume = ResumeRepo::new(&state.pool).delete(id).await?;
    let path = state.uploads.dir.join(&resume.stored_name);
    match tokio::fs::remove_file(&path).await {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => tracing::warn!(path = %path.display(), error = %e, "failed to remove resume file"),
    }
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/resume", get(current_resume))
        .route("/resume/file", get(download_resume))
}

/// `max_upload` caps the file; the request body limit adds multipart overhead.
pub fn admin_router(max_upload: u64) -> Router<Arc<AppState>> {
    let body_limit = usize::try_from(max_upload.saturating_add(MULTIPART_OVERHEAD))
        .unwrap_or(usize::MAX);

    Router::new()
        .route(
            "/resume",
            post(upload_resume).layer(DefaultBodyLimit::max(body_limit)),
        )
        .route("/resumes", get(list_resumes))
        .route("/resumes/{id}", delete(delete_resume))
}
