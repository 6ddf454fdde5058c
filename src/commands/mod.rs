//! Command implementations for the CLI
//!
//! - quote: Price a single tier / country / grid location
//! - scenarios: Compare the configured scenarios
//! - config: Configuration display and validation

pub mod config;
pub mod quote;
pub mod scenarios;

use anyhow::Result;
use fuel_pricing::config::Config;
use fuel_pricing::pricing::StrategyKind;

/// Resolve the strategy from a `--strategy` flag, falling back to config
pub fn resolve_strategy(cfg: &Config, flag: Option<&str>) -> Result<StrategyKind> {
    match flag {
        Some(name) => name.parse().map_err(anyhow::Error::msg),
        None => cfg.report.strategy_kind(),
    }
}
