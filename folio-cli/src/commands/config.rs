//! `folio config` - write, show and locate the config file

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use folio_core::FolioConfig;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write a config file with default values
    Init(InitArgs),
    /// Print the effective config (file + environment) as TOML, password masked
    Show,
    /// Show config file path
    Path,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Overwrite an existing config
    #[arg(long, short)]
    pub force: bool,
}

pub fn run_config(args: ConfigArgs, explicit: Option<&Path>) -> Result<()> {
    match args.command {
        ConfigCommands::Init(init) => run_init(init, explicit),
        ConfigCommands::Show => run_show(explicit),
        ConfigCommands::Path => {
            println!("{}", target_path(explicit).display());
            Ok(())
        }
    }
}

fn target_path(explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(FolioConfig::config_path)
}

fn run_init(args: InitArgs, explicit: Option<&Path>) -> Result<()> {
    let path = target_path(explicit);

    if path.exists() && !args.force {
        bail!("Config already exists at {:?}\n\nUse --force to overwrite", path);
    }

    FolioConfig::default().save(&path)?;

    println!("Created config at: {}", path.display());
    println!("\nNext steps:");
    println!("  1. Set DATABASE_URL and FOLIO_ADMIN_TOKEN (environment or ~/.folio/.env)");
    println!("  2. Optionally set LLM_API_KEY for AI drafting");
    println!("  3. Run: folio migrate && folio serve");
    Ok(())
}

fn run_show(explicit: Option<&Path>) -> Result<()> {
    let config = FolioConfig::load(explicit)?;
    print!("{}", config.redacted().to_toml()?);

    let set = |present: bool| if present { "set" } else { "not set" };
    println!();
    println!("# FOLIO_ADMIN_TOKEN: {}", set(config.secrets.admin_token.is_some()));
    println!("# LLM API key: {}", set(config.secrets.llm_api_key.is_some()));
    Ok(())
}
