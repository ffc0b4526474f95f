//! Providers command - list available providers.

use anyhow::Result;
use product_reviews_providers::ReviewsService;
use tracing::info;

use crate::Cli;
use crate::output::print_providers;

/// Runs the providers command.
pub fn run(cli: &Cli, service: &ReviewsService) -> Result<()> {
    info!("listing providers");
    let descriptors = service.registry().providers();
    print_providers(&descriptors, cli.format, cli.pretty)
}
