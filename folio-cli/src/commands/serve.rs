//! HTTP server command

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use folio_core::FolioConfig;
use folio_server::db::{create_pool_with_options, migrations};
use folio_server::http::{run_server, AppState, ServerConfig};

#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (overrides [server].bind / FOLIO_BIND)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (overrides config/environment)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Skip schema migrations on startup
    #[arg(long)]
    pub no_migrate: bool,
}

pub async fn run_serve(args: ServeArgs, config: FolioConfig) -> Result<()> {
    let database_url = super::database_url(args.database_url, &config)?;

    let bind_addr = match args.bind {
        Some(addr) => addr,
        None => config
            .server
            .bind
            .parse()
            .with_context(|| format!("Invalid bind address: {}", config.server.bind))?,
    };

    let pool = create_pool_with_options(&database_url, config.database.max_connections)
        .await
        .context("Failed to create database pool")?;

    if !args.no_migrate {
        migrations::run(&pool)
            .await
            .context("Failed to run migrations")?;
    }

    let state = AppState::from_config(pool, &config).context("Failed to build LLM client")?;
    let server_config = ServerConfig {
        bind_addr,
        cors_permissive: args.cors_permissive || config.server.cors_permissive,
        allowed_origins: config.server.allowed_origins.clone(),
    };

    tracing::info!("Starting folio server on {}", bind_addr);
    run_server(state, server_config)
        .await
        .context("Server error")?;

    Ok(())
}
