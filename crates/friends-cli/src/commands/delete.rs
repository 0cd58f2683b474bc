//! Delete command implementation.

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Args;

use friends_core::{Directory, FriendId};

use crate::interact::Terminal;
use crate::output;
use crate::views::{DeleteOutcome, EntryCard};

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Friend id
    pub id: String,

    /// Skip confirmation prompt
    #[arg(long, short = 'f')]
    pub force: bool,
}

pub async fn run<D: Directory>(args: DeleteArgs, directory: Arc<D>) -> Result<()> {
    let id: FriendId = args.id.parse().context("Invalid friend id")?;

    // The confirmation names the friend, so fetch it first
    let friend = directory
        .get_by_id(id)
        .await
        .with_context(|| format!("Failed to load friend {}", id))?;

    let mut ui = if args.force {
        Terminal::forced()
    } else {
        Terminal::new()
    };

    let outcome = EntryCard::new(&friend)
        .delete(
            directory.as_ref(),
            &mut ui,
            Some(|id| output::success(&format!("Removed {} ({})", friend.name, id))),
        )
        .await;

    match outcome {
        DeleteOutcome::Deleted => Ok(()),
        DeleteOutcome::Declined => {
            eprintln!("Aborted.");
            Ok(())
        }
        DeleteOutcome::Failed => bail!("Friend {} was not removed", id),
    }
}
