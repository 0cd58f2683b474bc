//! Directory service trait.

use std::sync::Arc;

use async_trait::async_trait;

use crate::model::{Friend, FriendDraft};
use crate::types::{ApiUrl, FriendId};
use crate::Result;

/// A remote friends directory.
///
/// Every method is a single round trip. Implementations do not retry or
/// cache; the caller decides what to do with a failure.
#[async_trait]
pub trait Directory: Send + Sync {
    /// Returns the base URL of the service.
    fn base_url(&self) -> &ApiUrl;

    /// Fetch every friend, in the order the service returns them.
    async fn list_all(&self) -> Result<Vec<Friend>>;

    /// Fetch a single friend.
    async fn get_by_id(&self, id: FriendId) -> Result<Friend>;

    /// Create a friend from a draft, returning the stored record.
    async fn create(&self, draft: &FriendDraft) -> Result<Friend>;

    /// Replace a friend's stored fields, returning the stored record.
    async fn update(&self, id: FriendId, friend: &FriendDraft) -> Result<Friend>;

    /// Delete a friend.
    async fn delete_by_id(&self, id: FriendId) -> Result<()>;
}

#[async_trait]
impl<T> Directory for Arc<T>
where
    T: Directory + ?Sized,
{
    fn base_url(&self) -> &ApiUrl {
        (**self).base_url()
    }

    async fn list_all(&self) -> Result<Vec<Friend>> {
        (**self).list_all().await
    }

    async fn get_by_id(&self, id: FriendId) -> Result<Friend> {
        (**self).get_by_id(id).await
    }

    async fn create(&self, draft: &FriendDraft) -> Result<Friend> {
        (**self).create(draft).await
    }

    async fn update(&self, id: FriendId, friend: &FriendDraft) -> Result<Friend> {
        (**self).update(id, friend).await
    }

    async fn delete_by_id(&self, id: FriendId) -> Result<()> {
        (**self).delete_by_id(id).await
    }
}
