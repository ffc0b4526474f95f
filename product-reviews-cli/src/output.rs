//! Output formatting for CLI commands.

use anyhow::Result;
use product_reviews_core::{HealthCheckResult, ProviderReviewList};
use product_reviews_providers::ProviderDescriptor;

use crate::OutputFormat;

/// Serializes any JSON-encodable value per the global format flags.
fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(out)
}

/// Prints a fetch result.
pub fn print_reviews(
    result: &ProviderReviewList,
    format: OutputFormat,
    pretty: bool,
) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", to_json(result, pretty)?),
        OutputFormat::Text => {
            println!("{} reviews from {}", result.count(), result.provider);
            println!("{}", "─".repeat(60));
            for review in &result.reviews {
                println!(
                    "[{:.1}] {}  {}",
                    review.rating,
                    review.created_at.format("%Y-%m-%d"),
                    review.summary.as_deref().or(review.text.as_deref()).unwrap_or("")
                );
            }
        }
    }
    Ok(())
}

/// Prints the provider listing.
pub fn print_providers(
    descriptors: &[ProviderDescriptor],
    format: OutputFormat,
    pretty: bool,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let entries: Vec<_> = descriptors
                .iter()
                .map(|d| {
                    serde_json::json!({
                        "name": d.name,
                        "description": d.description,
                        "url_pattern": d.url_pattern.as_str(),
                        "source": d.source,
                    })
                })
                .collect();
            println!("{}", to_json(&entries, pretty)?);
        }
        OutputFormat::Text => {
            for d in descriptors {
                println!("{:<12} [{}] {}", d.name, d.source, d.description);
                println!("{:<12} pattern: {}", "", d.url_pattern.as_str());
            }
            println!();
            println!("Total: {} providers", descriptors.len());
        }
    }
    Ok(())
}

/// Prints health-check outcomes grouped by provider.
pub fn print_health(
    results: &[(String, Vec<HealthCheckResult>)],
    format: OutputFormat,
    pretty: bool,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let entries: Vec<_> = results
                .iter()
                .map(|(name, checks)| serde_json::json!({ "provider": name, "results": checks }))
                .collect();
            println!("{}", to_json(&entries, pretty)?);
        }
        OutputFormat::Text => {
            for (name, checks) in results {
                println!("{name}:");
                for check in checks {
                    let mark = if check.is_healthy { "ok " } else { "FAIL" };
                    if check.url.is_empty() {
                        println!("  {mark} {}", check.message);
                    } else {
                        println!("  {mark} {} ({})", check.url, check.message);
                    }
                }
            }
        }
    }
    Ok(())
}
