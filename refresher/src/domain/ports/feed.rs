//! Feed source port

use async_trait::async_trait;

use crate::domain::entities::EntryCollection;
use crate::error::RefreshError;

/// Something that answers a GET for a feed URL with JSON
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Issue exactly one request for `feeds_url` and decode the body.
    /// No retries.
    async fn fetch(&self, feeds_url: &str) -> Result<EntryCollection, RefreshError>;
}
