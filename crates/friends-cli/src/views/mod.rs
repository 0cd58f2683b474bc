//! Screens of the application.
//!
//! Each view owns its local state, runs its effects through a
//! [`Directory`](friends_core::Directory) and renders itself to text.

mod card;
mod create;
mod detail;
mod list;

pub use card::EntryCard;
pub use create::{CreationView, SubmitOutcome};
pub use detail::DetailView;
pub use list::ListView;

/// Alert shown when a delete request fails.
pub(crate) const DELETE_FAILED: &str = "Failed to delete friend. Please try again.";

/// What happened to a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The service removed the friend.
    Deleted,
    /// The user did not confirm, or deleting is disabled.
    Declined,
    /// The service call failed; the user has been alerted.
    Failed,
}

/// Load lifecycle shared by the list and detail views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

impl Status {
    pub fn is_loading(&self) -> bool {
        matches!(self, Status::Idle | Status::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Status::Failed(message) => Some(message),
            _ => None,
        }
    }
}
