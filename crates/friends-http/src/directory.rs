//! HTTP-backed directory implementation.

use async_trait::async_trait;
use reqwest::Method;
use tracing::{debug, instrument};

use friends_core::traits::Directory;
use friends_core::{ApiUrl, Friend, FriendDraft, FriendId, Result};

use crate::client::HttpClient;

/// A directory reached over plain REST calls.
///
/// | operation | request |
/// |-----------|---------|
/// | `list_all` | `GET /friends` |
/// | `get_by_id` | `GET /friends/{id}` |
/// | `create` | `POST /friends` |
/// | `update` | `PUT /friends/{id}` |
/// | `delete_by_id` | `DELETE /friends/{id}` |
#[derive(Debug, Clone)]
pub struct HttpDirectory {
    api: ApiUrl,
    client: HttpClient,
}

impl HttpDirectory {
    /// Create a directory client for the given base URL.
    pub fn new(api: ApiUrl) -> Self {
        Self {
            api,
            client: HttpClient::new(),
        }
    }
}

#[async_trait]
impl Directory for HttpDirectory {
    fn base_url(&self) -> &ApiUrl {
        &self.api
    }

    #[instrument(skip(self), fields(api = %self.api))]
    async fn list_all(&self) -> Result<Vec<Friend>> {
        debug!("Listing friends");
        self.client.get_json(&self.api.collection_url()).await
    }

    #[instrument(skip(self), fields(api = %self.api))]
    async fn get_by_id(&self, id: FriendId) -> Result<Friend> {
        debug!(%id, "Getting friend");
        self.client.get_json(&self.api.resource_url(id)).await
    }

    #[instrument(skip(self, draft), fields(api = %self.api))]
    async fn create(&self, draft: &FriendDraft) -> Result<Friend> {
        debug!(name = %draft.name, "Creating friend");
        self.client
            .send_json(Method::POST, &self.api.collection_url(), draft)
            .await
    }

    #[instrument(skip(self, friend), fields(api = %self.api))]
    async fn update(&self, id: FriendId, friend: &FriendDraft) -> Result<Friend> {
        debug!(%id, name = %friend.name, "Replacing friend");
        self.client
            .send_json(Method::PUT, &self.api.resource_url(id), friend)
            .await
    }

    #[instrument(skip(self), fields(api = %self.api))]
    async fn delete_by_id(&self, id: FriendId) -> Result<()> {
        debug!(%id, "Deleting friend");
        self.client.delete(&self.api.resource_url(id)).await
    }
}
