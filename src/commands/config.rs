use anyhow::Result;
use colored::Colorize;
use fuel_pricing::config::Config;
use std::path::Path;
use tracing::info;

/// Execute the config show command
///
/// Displays the effective configuration (file plus environment overrides)
pub fn show(cfg: &Config) -> Result<()> {
    info!("Displaying effective configuration");

    println!("{}", "Current Configuration:".green().bold());
    println!();

    // Serialize to TOML format
    let toml_string = toml::to_string_pretty(cfg)?;
    println!("{}", toml_string);

    Ok(())
}

/// Execute the config validate command
///
/// Loading already validated the configuration; this prints a summary
pub fn validate(cfg: &Config, path: &Path) -> Result<()> {
    info!("Validating configuration file");

    let source = if path.exists() {
        path.display().to_string()
    } else {
        format!("{} (not found, using defaults)", path.display())
    };

    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!("  {}: {}", "Source".cyan(), source);
    println!(
        "  {}: {} ({})",
        "Logging".cyan(),
        cfg.logging.level,
        cfg.logging.format
    );
    println!("  {}: {}", "Strategy".cyan(), cfg.report.strategy);
    println!("  {}: {}", "Currency Symbol".cyan(), cfg.report.currency_symbol);
    println!("  {}: {}", "Scenarios".cyan(), cfg.scenarios.len());
    for (idx, scenario) in cfg.scenarios.iter().enumerate() {
        println!(
            "    {}. tier {} / {} / {}",
            idx + 1,
            scenario.tier,
            scenario.country,
            scenario.grid_location
        );
    }

    info!("Configuration validation successful");
    Ok(())
}
