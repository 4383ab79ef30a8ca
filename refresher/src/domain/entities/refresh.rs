//! Refresh targets and outcomes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Locator;

/// Unique identifier for one refresh invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RefreshId(pub Uuid);

impl RefreshId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RefreshId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RefreshId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The three fixed arguments of a refresh: where to fetch, what template
/// to fill, which element to overwrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshTarget {
    pub feeds_url: String,
    pub template: Locator,
    pub destination: Locator,
}

impl RefreshTarget {
    pub fn new(feeds_url: impl Into<String>, template: Locator, destination: Locator) -> Self {
        Self {
            feeds_url: feeds_url.into(),
            template,
            destination,
        }
    }

    /// Feed entries from subscribed sources, newest first
    pub fn entries() -> Self {
        Self::new(
            "/entries",
            Locator::from_id("entries-template"),
            Locator::from_id("entries-table"),
        )
    }

    /// Subscribed sources
    pub fn sources() -> Self {
        Self::new(
            "/sources",
            Locator::from_id("sources-template"),
            Locator::from_id("sources-table"),
        )
    }

    /// Tags defined by the user
    pub fn tags() -> Self {
        Self::new(
            "/tags",
            Locator::from_id("tags-template"),
            Locator::from_id("tags-table"),
        )
    }
}

impl Default for RefreshTarget {
    fn default() -> Self {
        Self::entries()
    }
}

/// What a completed refresh wrote
#[derive(Debug, Clone)]
pub struct RefreshOutcome {
    pub id: RefreshId,
    pub destination: Locator,
    /// Length of the rendered markup in bytes
    pub bytes_written: usize,
    /// Top-level record count when the payload was an array
    pub entry_count: Option<usize>,
    pub completed_at: DateTime<Utc>,
}
