//! Persisted friend records.

use serde::{Deserialize, Serialize};

use crate::model::FriendDraft;
use crate::types::FriendId;

/// A friend record as stored by the directory service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Friend {
    /// Server-assigned identifier.
    pub id: FriendId,

    /// Display name.
    pub name: String,

    /// URL of the friend's photo.
    pub photo: String,

    /// Free-form description.
    pub description: String,
}

/// Changes to some fields of a friend record.
///
/// The service replaces whole records, so a patch is never sent as is. It is
/// applied to the current record to produce the replacement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FriendPatch {
    pub name: Option<String>,
    pub photo: Option<String>,
    pub description: Option<String>,
}

impl FriendPatch {
    /// Returns true if the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.photo.is_none() && self.description.is_none()
    }

    /// The full record that results from applying this patch to `current`.
    pub fn apply(self, current: Friend) -> FriendDraft {
        FriendDraft {
            name: self.name.unwrap_or(current.name),
            photo: self.photo.unwrap_or(current.photo),
            description: self.description.unwrap_or(current.description),
        }
    }
}
