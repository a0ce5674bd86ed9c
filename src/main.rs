use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use catalog_admin::config::AdminConfig;

mod cli_exec;
mod cli_subcommands;

use self::cli_subcommands::{CarCommands, NamedCommands};

#[derive(Parser)]
#[command(name = "catalog-admin")]
#[command(about = "Vehicle catalog administration", long_about = None)]
struct Cli {
    /// JSON config file (api_base_url, asset_base_url, ...)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Admin API base URL (overrides config and CATALOG_ADMIN_URL)
    #[arg(long, global = true)]
    url: Option<String>,

    /// Base URL uploaded images are served from
    #[arg(long, global = true)]
    assets: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show catalog counts
    Status {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// List, add or delete brands
    Brands {
        #[command(subcommand)]
        command: NamedCommands,
    },

    /// List, add or delete models
    Models {
        #[command(subcommand)]
        command: NamedCommands,
    },

    /// List, add, show or delete car listings
    Cars {
        #[command(subcommand)]
        command: CarCommands,
    },
}

#[tokio::main]
async fn main() {
    catalog_admin::logging::init("warn");
    if let Err(err) = run().await {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let cfg = resolve_config(&cli)?;
    cli_exec::handle_command(&cfg, cli.command).await
}

/// Flags win over the environment, which wins over the config file.
fn resolve_config(cli: &Cli) -> Result<AdminConfig> {
    let mut cfg = match &cli.config {
        Some(path) => AdminConfig::load(path).context("load admin config")?,
        None => AdminConfig::default(),
    };
    cfg.apply_env();
    if let Some(url) = &cli.url {
        cfg.api_base_url = url.clone();
    }
    if let Some(assets) = &cli.assets {
        cfg.asset_base_url = Some(assets.clone());
    }
    Ok(cfg)
}
