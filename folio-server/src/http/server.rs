//! Axum server setup
//!
//! - CORS restricted to configured origins unless permissive
//! - Request tracing
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use folio_core::FolioConfig;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes;
use crate::ai::{LlmClient, LlmError, OpenAiClient};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:3030)
    pub bind_addr: SocketAddr,

    /// Allow permissive CORS (default: false = `allowed_origins` only)
    pub cors_permissive: bool,

    /// Origins the public site is served from
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3030)),
            cors_permissive: false,
            allowed_origins: vec!["http://localhost:3000".to_string()],
        }
    }
}

/// Where resume uploads go and how big they may be
#[derive(Debug, Clone)]
pub struct UploadSettings {
    pub dir: PathBuf,
    pub max_resume_bytes: u64,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    /// Bearer token for `/api/admin`; `None` locks the admin API
    pub admin_token: Option<String>,
    /// Absent when no LLM API key is configured
    pub llm: Option<Arc<dyn LlmClient>>,
    pub uploads: UploadSettings,
}

impl AppState {
    /// Assemble state from loaded config, building the LLM client when a key is set.
    pub fn from_config(pool: PgPool, config: &FolioConfig) -> Result<Self, LlmError> {
        let llm: Option<Arc<dyn LlmClient>> = match config.secrets.llm_api_key.as_deref() {
            Some(key) => {
                tracing::info!(model = %config.llm.model, base = %config.llm.api_base_url, "LLM client configured");
                Some(Arc::new(OpenAiClient::new(config.llm.clone(), key)?))
            }
            None => {
                tracing::warn!("No LLM API key set; AI routes will be unavailable");
                None
            }
        };

        if config.secrets.admin_token.is_none() {
            tracing::warn!("FOLIO_ADMIN_TOKEN not set; admin API will reject every request");
        }

        Ok(Self {
            pool,
            admin_token: config.secrets.admin_token.clone(),
            llm,
            uploads: UploadSettings {
                dir: config.uploads.dir.clone(),
                max_resume_bytes: config.uploads.max_resume_bytes,
            },
        })
    }
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    if config.cors_permissive {
        tracing::warn!("CORS: Permissive mode enabled - all origins allowed");
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|o| match o.parse() {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(origin = %o, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Build the full router: `/health`, public `/api/*` and `/api/admin/*`.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let max_upload = state.uploads.max_resume_bytes;

    let public = Router::new()
        .merge(routes::profile::router())
        .merge(routes::skills::router())
        .merge(routes::projects::router())
        .merge(routes::experience::router())
        .merge(routes::posts::router())
        .merge(routes::socials::router())
        .merge(routes::testimonials::router())
        .merge(routes::resume::router())
        .merge(routes::contact::router());

    let admin = Router::new()
        .merge(routes::profile::admin_router())
        .merge(routes::skills::admin_router())
        .merge(routes::projects::admin_router())
        .merge(routes::experience::admin_router())
        .merge(routes::posts::admin_router())
        .merge(routes::socials::admin_router())
        .merge(routes::testimonials::admin_router())
        .merge(routes::resume::admin_router(max_upload))
        .merge(routes::contact::admin_router())
        .merge(routes::users::admin_router())
        .merge(routes::ai::admin_router());

    Router::new()
        .merge(routes::health::router())
        .nest("/api", public)
        .nest("/api/admin", admin)
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Run the HTTP server until Ctrl+C or SIGTERM.
pub async fn run_server(state: AppState, config: ServerConfig) -> Result<(), ServerError> {
    tokio::fs::create_dir_all(&state.uploads.dir).await?;
    tracing::info!(uploads = %state.uploads.dir.display(), "Upload directory ready");

    let app = build_router(state, &config);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 3030);
        assert!(!config.cors_permissive);
    }

    #[tokio::test]
    async fn state_without_secrets_has_no_llm_or_token() {
        let pool = sqlx::postgres::PgPoolOptions::new()
            .connect_lazy("postgres://localhost/folio_test")
            .unwrap();
        let state = AppState::from_config(pool, &FolioConfig::default()).unwrap();
        assert!(state.llm.is_none());
        assert!(state.admin_token.is_none());
    }
}
