use anyhow::Result;
use colored::Colorize;
use fuel_pricing::config::Config;
use fuel_pricing::pricing::{strategy_for, PriceBreakdown};
use fuel_pricing::report;
use tracing::info;

use super::resolve_strategy;

/// Execute the scenarios command
///
/// Prices every configured scenario and prints a comparison table
pub fn execute(cfg: &Config, strategy: Option<&str>, detailed: bool) -> Result<()> {
    let kind = resolve_strategy(cfg, strategy)?;
    let pricing = strategy_for(kind);
    let options = cfg.report.options();

    info!("Pricing {} scenarios with {} pricing", cfg.scenarios.len(), kind);

    let breakdowns = cfg
        .scenarios
        .iter()
        .map(|scenario| Ok(pricing.compute(&scenario.to_request()?)))
        .collect::<Result<Vec<PriceBreakdown>>>()?;

    if detailed {
        for breakdown in &breakdowns {
            println!("{}", report::format_breakdown(breakdown, &options));
            println!();
        }
    }

    println!("{}", format!("Scenario Comparison ({} pricing):", kind).bold());
    println!("{}", report::format_comparison(&breakdowns, &options));

    Ok(())
}
