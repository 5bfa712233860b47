//! folio CLI - portfolio backend server and maintenance
//!
//! - `serve`: run the HTTP API (migrates on start)
//! - `migrate`: create/upgrade the database schema
//! - `config`: write, show or locate `~/.folio/config.toml`
//! - `completions`: shell completion scripts

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use folio_core::FolioConfig;

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "folio",
    author,
    version,
    about = "Portfolio site backend: public content API, admin CRUD and AI blog drafting"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces over OTLP
    #[cfg(feature = "telemetry")]
    #[arg(long, global = true)]
    otel: bool,

    /// Config file (default: ~/.folio/config.toml)
    #[arg(long, global = true, value_name = "PATH", env = "FOLIO_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Apply database migrations and exit
    Migrate(commands::migrate::MigrateArgs),
    /// Manage folio configuration (init, show, path)
    Config(commands::config::ConfigArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: clap_complete::Shell,
}

fn run_completions(args: CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    clap_complete::generate(args.shell, &mut cmd, bin_name, &mut std::io::stdout());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let tracing_config = tracing_setup::TracingConfig {
        debug: cli.debug,
        #[cfg(feature = "telemetry")]
        otel: cli.otel,
    };
    tracing_setup::init(&tracing_config).ok();

    folio_core::load_dotenv();

    let result = match cli.command {
        Commands::Serve(args) => {
            let config = FolioConfig::load(cli.config.as_deref())?;
            commands::run_serve(args, config).await
        }
        Commands::Migrate(args) => {
            let config = FolioConfig::load(cli.config.as_deref())?;
            commands::run_migrate(args, config).await
        }
        Commands::Config(args) => commands::run_config(args, cli.config.as_deref()),
        Commands::Completions(args) => run_completions(args),
    };

    tracing_setup::shutdown_otel();
    result
}
