/* src/cli/core/src/main.rs */

mod check;
mod config;
mod fetch;
mod logging;
mod serve;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::config::{find_vitrine_config, load_vitrine_config};

#[derive(Parser)]
#[command(name = "vitrine", about = "Serve a CMS-backed multilingual site", version)]
struct Cli {
  /// Path to vitrine.toml (default: search upward from the current directory)
  #[arg(long, short, global = true)]
  config: Option<PathBuf>,

  /// Debug-level logging
  #[arg(long, short, global = true, conflicts_with = "quiet")]
  verbose: bool,

  /// Only log warnings and errors
  #[arg(long, short, global = true)]
  quiet: bool,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Start the HTTP server
  Serve {
    #[arg(long)]
    host: Option<String>,
    #[arg(long, short)]
    port: Option<u16>,
  },
  /// Fetch a page through the locale fallback chain and print it as JSON
  Fetch {
    slug: String,
    #[arg(long, short)]
    locale: Option<String>,
    /// Read unpublished drafts
    #[arg(long)]
    draft: bool,
  },
  /// List configured and CMS-enabled locales
  Locales,
  /// Validate the configuration
  Check {
    /// Also check that the CMS answers
    #[arg(long)]
    probe: bool,
  },
}

fn config_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
  match explicit {
    Some(path) => Ok(path),
    None => {
      let cwd = std::env::current_dir().context("failed to get cwd")?;
      find_vitrine_config(&cwd)
    }
  }
}

async fn run(cli: Cli) -> Result<()> {
  let path = config_path(cli.config)?;
  debug!(path = %path.display(), "loading config");
  let config = load_vitrine_config(&path)?;

  match cli.command {
    Command::Serve { host, port } => {
      ui::banner(env!("CARGO_PKG_VERSION"));
      serve::run_serve(config, host, port).await
    }
    Command::Fetch { slug, locale, draft } => {
      fetch::run_fetch(&config, &slug, locale.as_deref(), draft).await
    }
    Command::Locales => fetch::run_locales(&config).await,
    Command::Check { probe } => check::run_check(&path, &config, probe).await,
  }
}

#[tokio::main]
async fn main() {
  let cli = Cli::parse();
  logging::init(cli.verbose, cli.quiet);

  if let Err(e) = run(cli).await {
    ui::error(&format!("{e:#}"));
    std::process::exit(1);
  }
}
