// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! product-reviews CLI - fetch and normalize customer product reviews.
//!
//! # Examples
//!
//! ```bash
//! # Fetch reviews for a URL
//! product-reviews scrape https://example.com/reviews/product-1
//!
//! # JSON output
//! product-reviews scrape --format json --pretty jsonfs:///tmp/reviews.json
//!
//! # List providers (built-in + plugins + extensions)
//! product-reviews providers
//!
//! # Health-check every provider with test URLs
//! product-reviews check
//!
//! # Load extra providers from a plugins directory
//! product-reviews --plugins-dir ./plugins providers
//! ```

mod commands;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use product_reviews_providers::{Registry, RegistryConfig, ReviewsService};
use tracing_subscriber::EnvFilter;

use commands::{check, providers, scrape};

/// Environment variable naming the plugins directory.
///
/// Resolution order: `--plugins-dir` flag, then this variable, then no
/// filesystem discovery at all. Read only here, at the outermost entry
/// point; the registry itself never touches the environment.
const PLUGINS_DIR_ENV: &str = "PRODUCT_REVIEWS_PLUGINS_DIR";

// ============================================================================
// CLI Definition
// ============================================================================

/// product-reviews CLI - customer review fetching and normalization.
#[derive(Parser)]
#[command(name = "product-reviews")]
#[command(about = "Fetch and normalize customer product reviews")]
#[command(long_about = r"
product-reviews routes a URL to the provider that knows how to fetch and
parse its reviews.

Built-in providers:
  • dummy   - fixed reviews for testing (https://example.com/reviews/...)
  • jsonfs  - reviews from a local JSON file (jsonfs://<filepath>)

More providers come from TOML plugin files in the plugins directory and
from extension entries registered by an embedding application.

Examples:
  product-reviews scrape https://example.com/reviews/product-1
  product-reviews providers
  product-reviews check --provider dummy
")]
#[command(version)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Directory to scan for plugin definition files.
    #[arg(long, global = true)]
    pub plugins_dir: Option<PathBuf>,

    /// Verbose output (show debug logs).
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Fetch and print the reviews behind a URL.
    #[command(visible_alias = "s")]
    Scrape(scrape::ScrapeArgs),

    /// List available providers.
    #[command(visible_alias = "p")]
    Providers,

    /// Health-check providers against their test URLs.
    #[command(visible_alias = "c")]
    Check(check::CheckArgs),
}

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    Text,
    /// Machine-readable JSON.
    Json,
}

// ============================================================================
// Entry Point
// ============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let plugins_dir = cli
        .plugins_dir
        .clone()
        .or_else(|| std::env::var_os(PLUGINS_DIR_ENV).map(PathBuf::from));

    let config = match plugins_dir {
        Some(dir) => RegistryConfig::new().with_plugins_dir(dir),
        None => RegistryConfig::new(),
    };
    let service = ReviewsService::new(Registry::new(config));

    match &cli.command {
        Commands::Scrape(args) => scrape::run(&cli, args, &service),
        Commands::Providers => providers::run(&cli, &service),
        Commands::Check(args) => check::run(&cli, args, &service),
    }
}
