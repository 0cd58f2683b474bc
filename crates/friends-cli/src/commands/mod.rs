//! Subcommand implementations.

mod add;
mod browse;
mod delete;
mod edit;
mod list;
mod show;

use std::sync::Arc;

use anyhow::Result;
use clap::Subcommand;

use friends_core::ApiUrl;
use friends_http::HttpDirectory;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List friends, optionally filtered by a search text
    List(list::ListArgs),

    /// Show a single friend
    Show(show::ShowArgs),

    /// Add a new friend
    Add(add::AddArgs),

    /// Remove a friend
    Delete(delete::DeleteArgs),

    /// Change fields of an existing friend
    Edit(edit::EditArgs),

    /// Browse the directory interactively
    Browse(browse::BrowseArgs),
}

pub async fn handle(cmd: Commands, api: ApiUrl) -> Result<()> {
    let directory = Arc::new(HttpDirectory::new(api));

    match cmd {
        Commands::List(args) => list::run(args, directory).await,
        Commands::Show(args) => show::run(args, directory).await,
        Commands::Add(args) => add::run(args, directory).await,
        Commands::Delete(args) => delete::run(args, directory).await,
        Commands::Edit(args) => edit::run(args, directory).await,
        Commands::Browse(args) => browse::run(args, directory).await,
    }
}
