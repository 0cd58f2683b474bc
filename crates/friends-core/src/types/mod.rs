//! Core directory types.
//!
//! These types validate at construction time so that a malformed base URL
//! or identifier never reaches the network layer.

mod api_url;
mod friend_id;

pub use api_url::ApiUrl;
pub use friend_id::FriendId;
