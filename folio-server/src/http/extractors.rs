//! Custom Axum extractors

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::Json;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use super::error::ApiError;
use super::server::AppState;
use crate::models::ValidationError;

/// Proof that the request carried the admin bearer token.
///
/// With no token configured every admin request is rejected.
pub struct AdminSession;

impl FromRequestParts<Arc<AppState>> for AdminSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let Some(expected) = state.admin_token.as_deref() else {
            tracing::debug!("admin request rejected: no admin token configured");
            return Err(ApiError::Unauthorized);
        };

        let presented = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::trim);

        match presented {
            Some(token) if constant_time_eq(token.as_bytes(), expected.as_bytes()) => Ok(Self),
            _ => Err(ApiError::Unauthorized),
        }
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Extract and validate a UUID from path
pub struct ValidUuid(pub Uuid);

impl<S> FromRequestParts<S> for ValidUuid
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Empty { field: "id" }))?;

        let uuid = Uuid::parse_str(&id).map_err(|_| {
            ApiError::Validation(ValidationError::InvalidFormat {
                field: "id",
                reason: "invalid UUID format",
            })
        })?;

        Ok(Self(uuid))
    }
}

/// `Json<T>` whose rejection uses our error body instead of axum's plain text.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(json_rejection(rejection)),
        }
    }
}

/// axum's `DefaultBodyLimit` for buffered bodies.
const JSON_BODY_LIMIT: u64 = 2 * 1024 * 1024;

fn json_rejection(rejection: JsonRejection) -> ApiError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return ApiError::PayloadTooLarge {
            max_bytes: JSON_BODY_LIMIT,
        };
    }
    ApiError::bad_request(rejection.body_text())
}

/// `Query<T>` whose rejection uses our error body.
pub struct QueryParams<T>(pub T);

impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Query::<T>::from_request_parts(parts, state)
            .await
            .map(|Query(value)| Self(value))
            .map_err(query_rejection)
    }
}

fn query_rejection(rejection: QueryRejection) -> ApiError {
    ApiError::bad_request(rejection.body_text())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_time_eq_matches_eq() {
        assert!(constant_time_eq(b"token", b"token"));
        assert!(!constant_time_eq(b"token", b"tokem"));
        assert!(!constant_time_eq(b"token", b"token2"));
        assert!(constant_time_eq(b"", b""));
    }

    #[derive(Debug, serde::Deserialize)]
    struct Paging {
        page: Option<u32>,
    }

    #[tokio::test]
    async fn bad_query_is_bad_request() {
        let (mut parts, ()) = axum::http::Request::builder()
            .uri("/things?page=abc")
            .body(())
            .unwrap()
            .into_parts();

        let err = QueryParams::<Paging>::from_request_parts(&mut parts, &())
            .await
            .err()
            .unwrap();
        assert!(matches!(err, ApiError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn good_query_parses() {
        let (mut parts, ()) = axum::http::Request::builder()
            .uri("/things?page=4")
            .body(())
            .unwrap()
            .into_parts();

        let QueryParams(q) = QueryParams::<Paging>::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(q.page, Some(4));
    }

    #[tokio::test]
    async fn oversized_json_is_payload_too_large() {
        let body = format!(r#"{{"pad":"{}"}}"#, "x".repeat(JSON_BODY_LIMIT as usize));
        let req = axum::http::Request::builder()
            .method("POST")
            .uri("/things")
            .header("content-type", "application/json")
            .body(axum::body::Body::from(body))
            .unwrap();

        let err = JsonBody::<serde_json::Value>::from_request(req, &())
            .await
            .err()
            .unwrap();
        assert_eq!(err.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let req = axum::http::Request::builder()
            .method("POST")
            .uri("/things")
            .header("content-type", "application/json")
            .body(axum::body::Body::from("{not json"))
            .unwrap();

        let err = JsonBody::<serde_json::Value>::from_request(req, &())
            .await
            .err()
            .unwrap();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
