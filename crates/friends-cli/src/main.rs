//! friends - terminal client for a friends directory service.
//!
//! Lists, searches, shows, adds and removes friends stored by a REST
//! service. `friends browse` opens an interactive session that walks the
//! same routes a browser front-end would.

mod browser;
mod cli;
mod commands;
mod config;
mod interact;
mod output;
mod router;
mod views;

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json_logs);

    let api = config::resolve_api_url(cli.api_url.as_deref())?;
    commands::handle(cli.command, api).await
}

/// Install the global subscriber. `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbosity: u8, json: bool) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for(verbosity).into())
        .from_env_lossy();

    // Logs share the terminal with command output, so keep them off stdout
    let text = (!json).then(|| fmt::layer().with_target(false).with_writer(io::stderr));
    let json = json.then(|| fmt::layer().json().with_writer(io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(text)
        .with(json)
        .init();
}

fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}
