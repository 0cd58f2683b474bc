//! CLI argument definitions.

use clap::Parser;

use crate::commands::Commands;

/// Terminal client for a friends directory service.
#[derive(Parser, Debug)]
#[command(name = "friends")]
#[command(author, version = env!("FRIENDS_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Base URL of the directory service (overrides FRIENDS_API_URL and the config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}
