//! Check command - health-check providers against their test URLs.

use anyhow::Result;
use clap::Args;
use product_reviews_providers::{ReviewsService, check_health};
use tracing::info;

use crate::Cli;
use crate::output::print_health;

/// Arguments for the check command.
#[derive(Args)]
pub struct CheckArgs {
    /// Check only this provider.
    #[arg(long)]
    pub provider: Option<String>,

    /// Check against this URL instead of the provider's test URLs.
    #[arg(long, requires = "provider")]
    pub url: Option<String>,
}

/// Runs the check command.
pub fn run(cli: &Cli, args: &CheckArgs, service: &ReviewsService) -> Result<()> {
    let registry = service.registry();

    let descriptors = match &args.provider {
        Some(name) => vec![registry.get(name)?],
        None => registry.providers(),
    };

    let mut results = Vec::with_capacity(descriptors.len());
    for descriptor in &descriptors {
        info!(provider = %descriptor.name, "health check");
        let checks = check_health(descriptor, args.url.as_deref());
        results.push((descriptor.name.clone(), checks));
    }
    print_health(&results, cli.format, cli.pretty)?;

    if results.iter().any(|(_, checks)| checks.iter().any(|c| !c.is_healthy)) {
        anyhow::bail!("one or more health checks failed");
    }
    Ok(())
}
