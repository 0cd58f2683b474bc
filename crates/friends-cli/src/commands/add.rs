//! Add command implementation.

use std::sync::Arc;

use anyhow::{Result, bail};
use clap::Args;

use friends_core::{Directory, DraftField};

use crate::interact::Terminal;
use crate::output;
use crate::router::{Navigator, Route};
use crate::views::{CreationView, SubmitOutcome};

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Friend's name
    #[arg(long)]
    pub name: String,

    /// URL of the friend's photo
    #[arg(long)]
    pub photo: String,

    /// A few words about the friend (at least 10 characters)
    #[arg(long)]
    pub description: String,

    /// Print the created friend as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run<D: Directory>(args: AddArgs, directory: Arc<D>) -> Result<()> {
    let mut view = CreationView::new(directory);
    view.set_field(DraftField::Name, args.name);
    view.set_field(DraftField::Photo, args.photo);
    view.set_field(DraftField::Description, args.description);

    let mut nav = Navigator::new(Route::AddFriend);
    let mut ui = Terminal::new();

    match view.submit(&mut ui, &mut nav).await {
        SubmitOutcome::Created(friend) => {
            if args.json {
                output::json_pretty(&friend)?;
            } else {
                output::success(&format!("Added {} as friend {}", friend.name, friend.id));
                output::page(nav.current());
            }
            Ok(())
        }
        SubmitOutcome::Invalid => {
            output::field_errors(view.errors());
            bail!("Friend was not added");
        }
        SubmitOutcome::Failed => bail!("Friend was not added"),
    }
}
