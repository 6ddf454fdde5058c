use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::pricing::{PriceRequest, StrategyKind};
use crate::report::ReportOptions;

/// Environment variable prefix, e.g. `FUEL_PRICING__LOGGING__LEVEL=debug`
pub const ENV_PREFIX: &str = "FUEL_PRICING";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default = "default_scenarios")]
    pub scenarios: Vec<ScenarioConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            report: ReportConfig::default(),
            scenarios: default_scenarios(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// "text" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Strategy used when a command does not pass `--strategy`
    #[serde(default = "default_strategy")]
    pub strategy: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            strategy: default_strategy(),
        }
    }
}

impl ReportConfig {
    pub fn options(&self) -> ReportOptions {
        ReportOptions {
            currency_symbol: self.currency_symbol.clone(),
        }
    }

    pub fn strategy_kind(&self) -> anyhow::Result<StrategyKind> {
        self.strategy.parse().map_err(anyhow::Error::msg)
    }
}

/// One row of the scenario comparison
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ScenarioConfig {
    pub tier: u32,
    pub country: String,
    pub grid_location: String,
}

impl ScenarioConfig {
    fn new(tier: u32, country: &str, grid_location: &str) -> Self {
        Self {
            tier,
            country: country.to_string(),
            grid_location: grid_location.to_string(),
        }
    }

    pub fn to_request(&self) -> anyhow::Result<PriceRequest> {
        Ok(PriceRequest::parse(self.tier, &self.country, &self.grid_location)?)
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_currency_symbol() -> String {
    "R".to_string()
}

fn default_strategy() -> String {
    "fixed".to_string()
}

fn default_scenarios() -> Vec<ScenarioConfig> {
    vec![
        ScenarioConfig::new(1, "south-africa", "coastal"),
        ScenarioConfig::new(6, "zimbabwe", "inland"),
        ScenarioConfig::new(14, "botswana", "coastal"),
    ]
}

/// Load configuration from an optional TOML file, then environment overrides
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    match cfg.logging.format.as_str() {
        "text" | "json" => {}
        other => anyhow::bail!("Invalid log format '{}' (expected text or json)", other),
    }

    if cfg.logging.level.trim().is_empty() {
        anyhow::bail!("Log level cannot be empty");
    }

    if cfg.report.currency_symbol.is_empty() {
        anyhow::bail!("Currency symbol cannot be empty");
    }

    cfg.report.strategy_kind()?;

    for (idx, scenario) in cfg.scenarios.iter().enumerate() {
        if let Err(e) = scenario.to_request() {
            anyhow::bail!("Scenario {} is invalid: {}", idx + 1, e);
        }
    }

    Ok(())
}
