use clap::{Parser, Subcommand};

use phoenix_search::RevenueBand;

#[derive(Parser)]
#[command(
    name = "phoenix-search",
    about = "Natural-language search over marketplace listing catalogs",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v: engine debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank a listing catalog against a free-text query
    Search {
        /// Path to a JSON array of listings ("-" reads stdin)
        #[arg(short, long)]
        listings: String,

        /// Free-text query, e.g. "profitable saas with growing revenue"
        query: String,

        /// Keep only listings with this exact industry label
        #[arg(long)]
        industry: Option<String>,

        /// Keep only listings with this exact age bracket label
        #[arg(long)]
        age: Option<String>,

        /// Keep only listings in this ARR band (0-50k, 50-250k, 250k-1m, 1m+)
        #[arg(long)]
        revenue: Option<RevenueBand>,

        /// Emit results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the key terms and intents extracted from a query
    Inspect {
        /// Free-text query to analyze
        query: String,
    },
}
