//! CLI definition using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub use skipsize_types::OutputFormat;

#[derive(Parser)]
#[command(name = "skipsize")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Pick a skip size offered at a location")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Postcode to query (overrides config)
    #[arg(long, global = true)]
    pub postcode: Option<String>,

    /// Area to query (overrides config)
    #[arg(long, global = true)]
    pub area: Option<String>,

    /// Read sizes from a local JSON catalogue instead of the API
    #[arg(long, global = true)]
    pub catalogue: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the size cards in display order
    List {
        /// Waste includes heavy materials (soil, rubble, concrete)
        #[arg(long)]
        heavy_waste: bool,

        /// Size id to show as already selected
        #[arg(long)]
        selected: Option<u32>,
    },

    /// Select a size by id
    Select {
        /// Size id to select
        id: u32,

        /// Waste includes heavy materials (soil, rubble, concrete)
        #[arg(long)]
        heavy_waste: bool,

        /// Size id that is selected before this one
        #[arg(long)]
        selected: Option<u32>,
    },

    /// Manage configuration
    Config(ConfigArgs),
}

#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Show current configuration
    #[arg(long)]
    pub show: bool,

    /// Set default postcode
    #[arg(long)]
    pub set_postcode: Option<String>,

    /// Set default area
    #[arg(long)]
    pub set_area: Option<String>,

    /// Set size API base URL
    #[arg(long)]
    pub set_api_url: Option<String>,

    /// Set offline catalogue path
    #[arg(long, conflicts_with = "clear_catalogue")]
    pub set_catalogue: Option<PathBuf>,

    /// Stop using the offline catalogue and query the API again
    #[arg(long)]
    pub clear_catalogue: bool,

    /// Set request timeout in seconds (0 = no timeout)
    #[arg(long)]
    pub set_timeout: Option<String>,

    /// Set default output format
    #[arg(long)]
    pub set_format: Option<OutputFormat>,

    /// Reset configuration to defaults
    #[arg(long)]
    pub reset: bool,
}
