//! Entries refresher
//!
//! One refresh is one fetch-render-write cycle: GET the feed, fill the
//! page's template with the payload, replace the destination's content.
//! Nothing is retried or cancelled, and overlapping refreshes are not
//! sequenced: whichever response arrives last is what the page shows.

use std::sync::Arc;

use chrono::Utc;
use tokio::task::JoinHandle;

use crate::domain::entities::{Locator, RefreshId, RefreshOutcome, RefreshTarget};
use crate::domain::ports::{Document, FeedSource};
use crate::error::RefreshError;
use crate::feed::render_entries;

/// Handle to a spawned refresh
pub type RefreshHandle = JoinHandle<Result<RefreshOutcome, RefreshError>>;

pub struct EntriesRefresher<F: FeedSource, D: Document> {
    feed: Arc<F>,
    document: Arc<D>,
}

impl<F: FeedSource, D: Document> EntriesRefresher<F, D> {
    pub fn new(feed: Arc<F>, document: Arc<D>) -> Self {
        Self { feed, document }
    }

    pub fn document(&self) -> &Arc<D> {
        &self.document
    }

    /// Fetch `feeds_url` and render it into `destination_ref` using the
    /// template at `template_ref`.
    ///
    /// Fails before sending anything if the destination isn't on the page
    /// or can't hold content.
    /// On any failure the destination keeps whatever it showed before.
    pub async fn refresh_entries(
        &self,
        feeds_url: &str,
        template_ref: &Locator,
        destination_ref: &Locator,
    ) -> Result<RefreshOutcome, RefreshError> {
        let id = RefreshId::new();

        match self
            .run(id, feeds_url, template_ref, destination_ref)
            .await
        {
            Ok(outcome) => {
                tracing::info!(
                    refresh_id = %id,
                    destination = %destination_ref,
                    bytes = outcome.bytes_written,
                    entries = ?outcome.entry_count,
                    "Entries refreshed"
                );
                Ok(outcome)
            }
            Err(e) => {
                tracing::warn!(refresh_id = %id, feeds_url, "Refresh failed: {}", e);
                Err(e)
            }
        }
    }

    pub async fn refresh(&self, target: &RefreshTarget) -> Result<RefreshOutcome, RefreshError> {
        self.refresh_entries(&target.feeds_url, &target.template, &target.destination)
            .await
    }

    async fn run(
        &self,
        id: RefreshId,
        feeds_url: &str,
        template_ref: &Locator,
        destination_ref: &Locator,
    ) -> Result<RefreshOutcome, RefreshError> {
        // A void element is on the page but can't take content.
        if self.document.inner_html(destination_ref).is_none() {
            return Err(RefreshError::DestinationNotFound(
                destination_ref.to_string(),
            ));
        }

        tracing::debug!(refresh_id = %id, feeds_url, "Fetching entries");
        let entries = self.feed.fetch(feeds_url).await?;
        tracing::debug!(refresh_id = %id, payload = %entries.as_value(), "Received entries");

        let template = self
            .document
            .inner_html(template_ref)
            .ok_or_else(|| RefreshError::TemplateNotFound(template_ref.to_string()))?;

        let html = render_entries(&template, &entries)?;
        self.document.set_inner_html(destination_ref, &html)?;

        Ok(RefreshOutcome {
            id,
            destination: destination_ref.clone(),
            bytes_written: html.len(),
            entry_count: entries.entry_count(),
            completed_at: Utc::now(),
        })
    }
}

impl<F, D> EntriesRefresher<F, D>
where
    F: FeedSource + 'static,
    D: Document + 'static,
{
    /// Fire-and-forget refresh on its own task. Failures are already
    /// logged; awaiting the handle is optional.
    pub fn spawn_refresh(self: &Arc<Self>, target: RefreshTarget) -> RefreshHandle {
        let refresher = Arc::clone(self);
        tokio::spawn(async move { refresher.refresh(&target).await })
    }
}
