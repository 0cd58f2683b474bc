//! HTTP image probe for photo previews.

use async_trait::async_trait;
use tracing::{debug, instrument};

use friends_core::traits::ImageProbe;

use crate::client::HttpClient;

/// Probes a photo URL by fetching it and checking the content type.
#[derive(Debug, Clone)]
pub struct HttpImageProbe {
    client: HttpClient,
}

impl HttpImageProbe {
    pub fn new() -> Self {
        Self {
            client: HttpClient::new(),
        }
    }
}

impl Default for HttpImageProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageProbe for HttpImageProbe {
    #[instrument(skip(self))]
    async fn probe(&self, url: &str) -> bool {
        match self.client.content_type(url).await {
            Ok(Some(content_type)) => is_image(&content_type),
            Ok(None) => false,
            Err(e) => {
                debug!(error = %e, "Image probe failed");
                false
            }
        }
    }
}

/// Media types are case-insensitive (RFC 9110).
fn is_image(content_type: &str) -> bool {
    content_type
        .get(..6)
        .is_some_and(|kind| kind.eq_ignore_ascii_case("image/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_types_match_in_any_case() {
        assert!(is_image("image/png"));
        assert!(is_image("Image/JPEG"));
        assert!(is_image("IMAGE/webp; charset=binary"));
        assert!(!is_image("text/html"));
        assert!(!is_image("imag"));
        assert!(!is_image("application/image"));
    }
}
