//! Show command implementation.

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Args;

use friends_core::{Directory, FriendId};

use crate::output;
use crate::views::DetailView;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Friend id
    pub id: String,

    /// Print the friend as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run<D: Directory>(args: ShowArgs, directory: Arc<D>) -> Result<()> {
    let id: FriendId = args.id.parse().context("Invalid friend id")?;

    let mut view = DetailView::new(directory, id);
    view.load().await;

    let Some(friend) = view.friend() else {
        bail!(
            "{}",
            view.status().error().unwrap_or("Friend not found or failed to load.")
        );
    };

    if args.json {
        output::json_pretty(friend)?;
    } else {
        println!("{}", view.render());
    }

    Ok(())
}
