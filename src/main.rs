use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use fuel_pricing::{config, init_tracing};

fn main() -> Result<()> {
    // Parse CLI arguments
    let args = cli::Cli::parse();

    // Logging settings come from the config file, so load it before tracing starts.
    // A broken config still gets default logging and is reported below.
    let loaded = config::load_config(&args.config);
    match &loaded {
        Ok(cfg) => init_tracing(&cfg.logging.level, &cfg.logging.format),
        Err(_) => init_tracing("info", "text"),
    }
    let cfg = loaded?;

    // Dispatch to appropriate command handler
    match args.get_command() {
        cli::Commands::Quote {
            tier,
            country,
            grid_location,
            strategy,
            json,
        } => {
            commands::quote::execute(&cfg, tier, &country, &grid_location, strategy.as_deref(), json)?;
        }
        cli::Commands::Scenarios { strategy, detailed } => {
            commands::scenarios::execute(&cfg, strategy.as_deref(), detailed)?;
        }
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&cfg)?,
            cli::ConfigCommands::Validate => commands::config::validate(&cfg, &args.config)?,
        },
        cli::Commands::Version => {
            println!("Fuel Pricing v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
