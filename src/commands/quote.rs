use anyhow::Result;
use fuel_pricing::config::Config;
use fuel_pricing::pricing::strategy_for;
use fuel_pricing::report;
use tracing::info;

use super::resolve_strategy;

/// Execute the quote command
///
/// Prints the breakdown for one tier / country / grid location. Invalid keys
/// are returned as errors rather than defaulted.
pub fn execute(
    cfg: &Config,
    tier: u32,
    country: &str,
    grid_location: &str,
    strategy: Option<&str>,
    json: bool,
) -> Result<()> {
    let kind = resolve_strategy(cfg, strategy)?;
    info!(
        "Quoting tier {} / {} / {} with {} pricing",
        tier, country, grid_location, kind
    );

    let breakdown = strategy_for(kind).quote(tier, country, grid_location)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&breakdown.rounded())?);
    } else {
        println!("{}", report::format_breakdown(&breakdown, &cfg.report.options()));
    }

    Ok(())
}
