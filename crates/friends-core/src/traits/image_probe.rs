//! Photo preview probe.

use async_trait::async_trait;

/// Checks whether a URL resolves to a loadable image.
#[async_trait]
pub trait ImageProbe: Send + Sync {
    /// Returns true if `url` could be shown as an image.
    ///
    /// Failures of any kind are reported as `false`.
    async fn probe(&self, url: &str) -> bool;
}
