pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "shipping-rate")]
#[command(about = "Quote a cart with the tiered weight carrier")]
pub struct CliConfig {
    /// Path to the carrier TOML configuration
    #[arg(short, long, default_value = "carrier.toml")]
    pub config: String,

    /// Path to the cart JSON file
    #[arg(long)]
    pub cart: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    /// Show chargeable weight and tier without producing a quote
    #[arg(long)]
    pub dry_run: bool,
}
