//! Detail view: a single friend.

use std::fmt::Write;
use std::sync::Arc;

use colored::Colorize;
use tracing::{info, instrument, warn};

use friends_core::{Directory, Friend, FriendId};

use crate::interact::Interaction;
use crate::router::{Navigator, Route};

use super::{DELETE_FAILED, Status};

const LOAD_FAILED: &str = "Friend not found or failed to load.";

/// Screen for `/friend/{id}`.
#[derive(Debug)]
pub struct DetailView<D> {
    directory: Arc<D>,
    id: FriendId,
    friend: Option<Friend>,
    status: Status,
}

impl<D: Directory> DetailView<D> {
    pub fn new(directory: Arc<D>, id: FriendId) -> Self {
        Self {
            directory,
            id,
            friend: None,
            status: Status::Idle,
        }
    }

    pub fn id(&self) -> FriendId {
        self.id
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn friend(&self) -> Option<&Friend> {
        self.friend.as_ref()
    }

    /// Fetch the friend for the current id.
    #[instrument(skip(self), fields(id = %self.id))]
    pub async fn load(&mut self) {
        self.status = Status::Loading;

        match self.directory.get_by_id(self.id).await {
            Ok(friend) => {
                self.friend = Some(friend);
                self.status = Status::Loaded;
            }
            Err(e) => {
                warn!(error = %e, not_found = e.is_not_found(), "Error fetching friend");
                self.friend = None;
                self.status = Status::Failed(LOAD_FAILED.to_string());
            }
        }
    }

    /// Point the view at another friend, reloading only when the id changed.
    pub async fn set_id(&mut self, id: FriendId) {
        if id != self.id || self.status == Status::Idle {
            self.id = id;
            self.load().await;
        }
    }

    /// Confirm, delete, and on success leave for the list.
    ///
    /// The detail route is replaced rather than pushed so going back does not
    /// return to a deleted friend.
    pub async fn delete(&mut self, ui: &mut dyn Interaction, nav: &mut Navigator) -> bool {
        let Some(friend) = &self.friend else {
            return false;
        };

        let question = format!(
            "Are you sure you want to remove {}? This action cannot be undone.",
            friend.name
        );
        if !ui.confirm(&question) {
            return false;
        }

        match self.directory.delete_by_id(friend.id).await {
            Ok(()) => {
                info!(id = %friend.id, "Friend deleted");
                nav.replace(Route::Home);
                true
            }
            Err(e) => {
                warn!(id = %friend.id, error = %e, "Error deleting friend");
                ui.alert(DELETE_FAILED);
                false
            }
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let back = format!("← Back to Friends  {}", Route::Home);

        if self.status.is_loading() {
            let _ = write!(out, "{}", "Loading friend details...".dimmed());
            return out;
        }

        let friend = match (&self.friend, self.status.error()) {
            (Some(friend), None) => friend,
            (_, error) => {
                let _ = writeln!(out, "{}", "Oops!".bold());
                let _ = writeln!(out, "{}", error.unwrap_or(LOAD_FAILED).red());
                let _ = write!(out, "{}", back.cyan());
                return out;
            }
        };

        let _ = writeln!(out, "{}", back.cyan());
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", friend.name.bold().underline());
        let _ = writeln!(out, "{}", friend.photo.dimmed());
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", friend.description);
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Edit Profile  {}",
            Route::EditFriend(friend.id).to_string().cyan()
        );
        let _ = writeln!(out, "{}", "Remove Friend (delete)".red());
        let _ = write!(
            out,
            "{}",
            format!("+ Add Another Friend  {}", Route::AddFriend).green()
        );
        out
    }
}
