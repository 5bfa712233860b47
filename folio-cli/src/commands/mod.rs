//! Command implementations for the folio CLI

pub mod config;
pub mod migrate;
pub mod serve;

pub use config::run_config;
pub use migrate::run_migrate;
pub use serve::run_serve;

use anyhow::{Context, Result};
use folio_core::FolioConfig;

/// Database URL from the flag, falling back to the loaded config
/// (which already reflects `DATABASE_URL`).
pub(crate) fn database_url(flag: Option<String>, config: &FolioConfig) -> Result<String> {
    flag.filter(|u| !u.trim().is_empty())
        .or_else(|| Some(config.database.url.clone()).filter(|u| !u.trim().is_empty()))
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, ~/.folio/.env or [database].url")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins_over_config() {
        let mut config = FolioConfig::default();
        config.database.url = "postgres://config/db".into();
        assert_eq!(
            database_url(Some("postgres://flag/db".into()), &config).unwrap(),
            "postgres://flag/db"
        );
        assert_eq!(database_url(None, &config).unwrap(), "postgres://config/db");
    }

    #[test]
    fn empty_url_is_an_error() {
        let mut config = FolioConfig::default();
        config.database.url = String::new();
        let err = database_url(Some("  ".into()), &config).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL not set"));
    }
}
