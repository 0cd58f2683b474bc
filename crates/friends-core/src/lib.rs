//! friends-core - Core directory types and traits.

pub mod error;
pub mod filter;
pub mod model;
pub mod traits;
pub mod types;

pub use error::Error;
pub use filter::{filter_friends, matches_search};
pub use model::{DraftField, FieldErrors, Friend, FriendDraft, FriendPatch};
pub use traits::{Directory, ImageProbe};
pub use types::{ApiUrl, FriendId};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
