//! folio-server: HTTP API behind a personal portfolio site
//!
//! Public JSON reads for the site (profile, skills, projects, experience,
//! blog, socials, resume, contact form) and a token-gated admin API for
//! managing that content, including LLM-assisted blog drafting.

pub mod ai;
pub mod db;
pub mod http;
pub mod models;

pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, UploadSettings};
