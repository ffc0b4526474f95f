//! Scrape command - fetch reviews for a URL.

use anyhow::Result;
use clap::Args;
use product_reviews_providers::ReviewsService;
use tracing::info;

use crate::Cli;
use crate::output::print_reviews;

/// Arguments for the scrape command.
#[derive(Args)]
pub struct ScrapeArgs {
    /// URL to fetch reviews for.
    pub url: String,
}

/// Runs the scrape command.
pub fn run(cli: &Cli, args: &ScrapeArgs, service: &ReviewsService) -> Result<()> {
    info!(url = %args.url, "scraping reviews");
    let result = service.parse_reviews(&args.url)?;
    print_reviews(&result, cli.format, cli.pretty)
}
