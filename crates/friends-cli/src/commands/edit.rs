//! Edit command implementation.

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Args;

use friends_core::{Directory, FriendId, FriendPatch};

use crate::output;

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Friend id
    pub id: String,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New photo URL
    #[arg(long)]
    pub photo: Option<String>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,

    /// Print the updated friend as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run<D: Directory>(args: EditArgs, directory: Arc<D>) -> Result<()> {
    let id: FriendId = args.id.parse().context("Invalid friend id")?;

    let patch = FriendPatch {
        name: args.name,
        photo: args.photo,
        description: args.description,
    };

    if patch.is_empty() {
        bail!("Nothing to change. Pass --name, --photo or --description.");
    }

    let current = directory
        .get_by_id(id)
        .await
        .with_context(|| format!("Failed to load friend {}", id))?;

    // The service replaces the whole record; validate exactly what is sent
    let edited = patch.apply(current);
    let errors = edited.validate();
    if !errors.is_empty() {
        output::field_errors(&errors);
        bail!("Friend {} was not changed", id);
    }

    let friend = directory
        .update(id, &edited)
        .await
        .context("Failed to update friend")?;

    if args.json {
        output::json_pretty(&friend)?;
    } else {
        output::success(&format!("Updated {} ({})", friend.name, friend.id));
    }

    Ok(())
}
