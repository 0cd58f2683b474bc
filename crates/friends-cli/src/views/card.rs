//! Entry card: one friend in the list grid.

use std::fmt::Write;

use colored::Colorize;
use tracing::{info, warn};

use friends_core::{Directory, Friend, FriendId};

use crate::interact::Interaction;
use crate::router::Route;

use super::{DELETE_FAILED, DeleteOutcome};

/// Presentational unit for a single friend, with an optional delete control.
#[derive(Debug, Clone, Copy)]
pub struct EntryCard<'a> {
    friend: &'a Friend,
    show_delete: bool,
}

impl<'a> EntryCard<'a> {
    pub fn new(friend: &'a Friend) -> Self {
        Self {
            friend,
            show_delete: true,
        }
    }

    /// Hide or show the delete control.
    #[allow(dead_code)]
    pub fn with_delete(mut self, show_delete: bool) -> Self {
        self.show_delete = show_delete;
        self
    }

    /// Where selecting the card leads.
    pub fn link(&self) -> Route {
        Route::Friend(self.friend.id)
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} {}  {}",
            format!("[{}]", self.friend.id).dimmed(),
            self.friend.name.bold(),
            self.link().to_string().cyan()
        );
        let _ = writeln!(out, "    {}", self.friend.description);
        let _ = write!(out, "    {}", self.friend.photo.dimmed());
        if self.show_delete {
            let _ = write!(out, "  {}", format!("(delete {})", self.friend.id).red());
        }
        out
    }

    /// Ask for confirmation, then delete the friend on the service.
    ///
    /// `on_delete` runs with the friend's id only after the service confirmed
    /// the removal. Deleting never navigates.
    pub async fn delete<F>(
        &self,
        directory: &dyn Directory,
        ui: &mut dyn Interaction,
        on_delete: Option<F>,
    ) -> DeleteOutcome
    where
        F: FnOnce(FriendId),
    {
        if !self.show_delete {
            return DeleteOutcome::Declined;
        }

        let friend = self.friend;
        if !ui.confirm(&format!("Are you sure you want to remove {}?", friend.name)) {
            return DeleteOutcome::Declined;
        }

        match directory.delete_by_id(friend.id).await {
            Ok(()) => {
                info!(id = %friend.id, "Friend deleted");
                if let Some(on_delete) = on_delete {
                    on_delete(friend.id);
                }
                DeleteOutcome::Deleted
            }
            Err(e) => {
                warn!(id = %friend.id, error = %e, "Error deleting friend");
                ui.alert(DELETE_FAILED);
                DeleteOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interact::testing::ScriptedUi;
    use crate::views::testing::{Call, FakeDirectory, friend, no_color};

    #[test]
    fn renders_name_description_and_link() {
        no_color();
        let f = friend(4, "Jo", "Climbs on weekends");
        let text = EntryCard::new(&f).render();

        assert!(text.contains("Jo"));
        assert!(text.contains("Climbs on weekends"));
        assert!(text.contains("https://img.test/4.jpg"));
        assert!(text.contains("/friend/4"));
        assert!(text.contains("(delete 4)"));
    }

    #[test]
    fn delete_control_can_be_hidden() {
        no_color();
        let f = friend(4, "Jo", "Climbs on weekends");
        let text = EntryCard::new(&f).with_delete(false).render();
        assert!(!text.contains("delete"));
    }

    #[tokio::test]
    async fn confirmed_delete_notifies_parent() {
        let directory = FakeDirectory::with(vec![friend(5, "Kai", "Tells long stories")]);
        let f = friend(5, "Kai", "Tells long stories");
        let mut ui = ScriptedUi::answering(&[true]);
        let mut notified = None;

        let outcome = EntryCard::new(&f)
            .delete(&directory, &mut ui, Some(|id| notified = Some(id)))
            .await;

        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert_eq!(notified, Some(FriendId::new(5)));
        assert_eq!(ui.confirms, vec!["Are you sure you want to remove Kai?"]);
        assert_eq!(directory.calls(), vec![Call::DeleteById(FriendId::new(5))]);
    }

    #[tokio::test]
    async fn declined_delete_makes_no_call() {
        let directory = FakeDirectory::with(vec![friend(5, "Kai", "Tells long stories")]);
        let f = friend(5, "Kai", "Tells long stories");
        let mut ui = ScriptedUi::answering(&[false]);

        let outcome = EntryCard::new(&f)
            .delete(&directory, &mut ui, None::<fn(FriendId)>)
            .await;

        assert_eq!(outcome, DeleteOutcome::Declined);
        assert!(directory.calls().is_empty());
    }

    #[tokio::test]
    async fn failed_delete_alerts_and_skips_callback() {
        let directory = FakeDirectory::with(vec![friend(5, "Kai", "Tells long stories")]);
        directory.set_offline(true);
        let f = friend(5, "Kai", "Tells long stories");
        let mut ui = ScriptedUi::answering(&[true]);
        let mut notified = false;

        let outcome = EntryCard::new(&f)
            .delete(&directory, &mut ui, Some(|_| notified = true))
            .await;

        assert_eq!(outcome, DeleteOutcome::Failed);
        assert!(!notified);
        assert_eq!(ui.alerts, vec![DELETE_FAILED]);
    }
}
