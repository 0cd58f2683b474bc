//! Directory record types.

mod draft;
mod friend;

pub use draft::{DESCRIPTION_HINT_MAX, DraftField, FieldErrors, FriendDraft, MIN_DESCRIPTION_LEN};
pub use friend::{Friend, FriendPatch};
