use anyhow::{Context, Result};
use clap::Parser;
use folio_core::FolioConfig;
use folio_server::db::{create_pool, migrations};

#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides config/environment)
    #[arg(long)]
    pub database_url: Option<String>,
}

pub async fn run_migrate(args: MigrateArgs, config: FolioConfig) -> Result<()> {
    let database_url = super::database_url(args.database_url, &config)?;

    let pool = create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;

    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    println!("Database schema is up to date");
    Ok(())
}
