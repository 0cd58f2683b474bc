//! List command implementation.

use std::sync::Arc;

use anyhow::{Result, bail};
use clap::Args;

use friends_core::Directory;

use crate::output;
use crate::views::ListView;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show friends whose name or description contains this text
    #[arg(long, short)]
    pub search: Option<String>,

    /// Print the matching friends as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run<D: Directory>(args: ListArgs, directory: Arc<D>) -> Result<()> {
    let mut view = ListView::new(directory);
    view.load().await;

    if let Some(error) = view.status().error() {
        bail!("{}", error);
    }

    if let Some(search) = args.search {
        view.set_search(search);
    }

    if args.json {
        output::json_pretty(&view.visible())?;
    } else {
        println!("{}", view.render());
    }

    Ok(())
}
