//! HTTP layer
//!
//! Axum server with:
//! - public read routes under `/api`
//! - bearer-token admin routes under `/api/admin`
//! - JSON error responses

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError, UploadSettings};
