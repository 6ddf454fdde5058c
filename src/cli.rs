use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fuel-pricing", version, about = "Per-liter fuel retail pricing calculator")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "fuel-pricing.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Price a single tier / country / grid location
    Quote {
        /// Customer tier (1-14)
        #[arg(short, long)]
        tier: u32,

        /// Country: south-africa, zimbabwe or botswana
        #[arg(long)]
        country: String,

        /// Grid location: coastal or inland
        #[arg(short, long)]
        grid_location: String,

        /// Pricing strategy: fixed or dynamic (defaults to config)
        #[arg(short, long)]
        strategy: Option<String>,

        /// Print the rounded breakdown as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Compare the configured scenarios (default)
    Scenarios {
        /// Pricing strategy: fixed or dynamic (defaults to config)
        #[arg(short, long)]
        strategy: Option<String>,

        /// Print each scenario's full breakdown before the comparison
        #[arg(short, long)]
        detailed: bool,
    },

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display the effective configuration
    Show,

    /// Validate configuration file
    Validate,
}

impl Cli {
    /// Get the command to execute, defaulting to Scenarios if none provided
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Scenarios {
            strategy: None,
            detailed: false,
        })
    }
}
