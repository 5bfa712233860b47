//! API error type with IntoResponse
//!
//! Every failure becomes `{"error": <code>, "message": <text>}`. Store, IO
//! and LLM failures are logged and answered with a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::ai::LlmError;
use crate::db::repos::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Malformed request body, path or multipart stream (400)
    BadRequest { message: String },

    /// Missing or wrong admin credentials (401)
    Unauthorized,

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Unique constraint violated (409)
    Conflict { message: String },

    /// Request body or upload exceeds its cap (413)
    PayloadTooLarge { max_bytes: u64 },

    /// Database error (500, logged)
    Database(DbError),

    /// LLM call failed or isn't configured (500, logged)
    Llm(LlmError),

    /// Internal error (500, logged)
    Internal { message: String },
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Database(_) | Self::Llm(_) | Self::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message) = match self {
            Self::Validation(e) => ("validation_error", e.to_string()),
            Self::BadRequest { message } => ("bad_request", message),
            Self::Unauthorized => ("unauthorized", "admin authentication required".to_string()),
            Self::NotFound { resource, id } => {
                ("not_found", format!("{} '{}' not found", resource, id))
            }
            Self::Conflict { message } => ("conflict", message),
            Self::PayloadTooLarge { max_bytes } => (
                "payload_too_large",
                format!("request body exceeds the {} byte limit", max_bytes),
            ),
            Self::Database(e) => {
                tracing::error!("Database error: {}", e);
                ("internal_error", "an internal error occurred".to_string())
            }
            Self::Llm(LlmError::NotConfigured) => {
                tracing::warn!("AI route called without an LLM API key configured");
                ("ai_unavailable", "AI service not configured".to_string())
            }
            Self::Llm(e) => {
                tracing::error!("LLM error: {}", e);
                ("ai_error", "AI request failed".to_string())
            }
            Self::Internal { message } => {
                tracing::error!("Internal error: {}", message);
                ("internal_error", "an internal error occurred".to_string())
            }
        };

        (status, Json(json!({ "error": code, "message": message }))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            DbError::Conflict(message) => Self::Conflict { message },
            other => Self::Database(other),
        }
    }
}

impl From<LlmError> for ApiError {
    fn from(e: LlmError) -> Self {
        Self::Llm(e)
    }
}

impl From<std::io::Error> for ApiError {
    fn from(e: std::io::Error) -> Self {
        Self::Internal {
            message: format!("IO error: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_400_with_message() {
        let err = ApiError::Validation(ValidationError::Empty { field: "name" });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "validation_error");
        assert_eq!(body["message"], "name cannot be empty");
    }

    #[tokio::test]
    async fn db_not_found_becomes_404() {
        let err: ApiError = DbError::NotFound {
            resource: "post",
            id: "hello".into(),
        }
        .into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["message"], "post 'hello' not found");
    }

    #[tokio::test]
    async fn db_conflict_becomes_409() {
        let err: ApiError = DbError::Conflict("duplicate value".into()).into();
        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn database_error_hides_details() {
        let err: ApiError = DbError::Sqlx(sqlx::Error::PoolTimedOut).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["message"], "an internal error occurred");
    }

    #[tokio::test]
    async fn llm_errors_are_500() {
        let response = ApiError::from(LlmError::EmptyReply).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"], "ai_error");

        let response = ApiError::from(LlmError::NotConfigured).into_response();
        assert_eq!(body_json(response).await["error"], "ai_unavailable");
    }

    #[tokio::test]
    async fn unauthorized_is_401() {
        assert_eq!(
            ApiError::Unauthorized.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
    }
}
