//! List view: every friend, with search and delete.

use std::fmt::Write;
use std::sync::Arc;

use colored::Colorize;
use tracing::{debug, instrument, warn};

use friends_core::{Directory, Friend, FriendId, filter_friends};

use crate::interact::Interaction;
use crate::router::Route;

use super::{EntryCard, Status};

const LOAD_FAILED: &str = "Failed to load friends. Please make sure the server is running.";

/// Home screen listing all friends.
///
/// `friends` is the last successfully loaded set; a failed reload leaves it
/// untouched. The visible subset is derived from `friends` and `search` on
/// every read.
#[derive(Debug)]
pub struct ListView<D> {
    directory: Arc<D>,
    friends: Vec<Friend>,
    search: String,
    status: Status,
}

impl<D: Directory> ListView<D> {
    pub fn new(directory: Arc<D>) -> Self {
        Self {
            directory,
            friends: Vec::new(),
            search: String::new(),
            status: Status::Idle,
        }
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    #[allow(dead_code)]
    pub fn friends(&self) -> &[Friend] {
        &self.friends
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Friends matching the current search text, in service order.
    pub fn visible(&self) -> Vec<&Friend> {
        filter_friends(&self.friends, &self.search)
    }

    /// Fetch the full list. Used on mount and by the retry control.
    #[instrument(skip(self))]
    pub async fn load(&mut self) {
        self.status = Status::Loading;

        match self.directory.list_all().await {
            Ok(friends) => {
                debug!(count = friends.len(), "Loaded friends");
                self.friends = friends;
                self.status = Status::Loaded;
            }
            Err(e) => {
                warn!(error = %e, "Error fetching friends");
                self.status = Status::Failed(LOAD_FAILED.to_string());
            }
        }
    }

    /// Delete a visible friend through its card.
    ///
    /// Returns whether the friend was removed.
    pub async fn delete(&mut self, id: FriendId, ui: &mut dyn Interaction) -> bool {
        if self.status != Status::Loaded {
            return false;
        }

        let Some(friend) = self.visible().into_iter().find(|f| f.id == id).cloned() else {
            ui.alert(&format!("No friend with id {} is listed.", id));
            return false;
        };

        let mut removed = None;
        EntryCard::new(&friend)
            .delete(self.directory.as_ref(), ui, Some(|id| removed = Some(id)))
            .await;

        match removed {
            Some(id) => {
                self.on_friend_deleted(id);
                true
            }
            None => false,
        }
    }

    /// Drop a friend the service has already deleted.
    pub fn on_friend_deleted(&mut self, id: FriendId) {
        self.friends.retain(|f| f.id != id);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        if self.status.is_loading() {
            let _ = write!(out, "{}", "Loading friends...".dimmed());
            return out;
        }

        if let Some(error) = self.status.error() {
            let _ = writeln!(out, "{}", error.red());
            let _ = write!(out, "{}", "Try Again (retry)".yellow());
            return out;
        }

        let _ = writeln!(out, "{}", "Friends".bold().underline());
        let _ = writeln!(out, "{}", "Everyone in the directory".dimmed());
        if !self.search.is_empty() {
            let _ = writeln!(out, "Search: {}", self.search.cyan());
        }
        let _ = writeln!(out, "{}", format!("+ Add New Friend  {}", Route::AddFriend).green());
        let _ = writeln!(out);

        let visible = self.visible();
        if visible.is_empty() {
            if self.search.is_empty() {
                let _ = write!(
                    out,
                    "No friends yet. Add your first friend! {}",
                    Route::AddFriend.to_string().cyan()
                );
            } else {
                let _ = write!(out, "No friends found matching \"{}\"", self.search);
            }
            return out;
        }

        let cards: Vec<String> = visible.iter().map(|f| EntryCard::new(f).render()).collect();
        let _ = write!(out, "{}", cards.join("\n\n"));

        if !self.search.is_empty() {
            let n = visible.len();
            let _ = write!(
                out,
                "\n\n{}",
                format!(
                    "Found {} friend{} matching \"{}\"",
                    n,
                    if n == 1 { "" } else { "s" },
                    self.search
                )
                .dimmed()
            );
        }

        out
    }
}
