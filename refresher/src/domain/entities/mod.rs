//! Domain entities
//!
//! Pure domain models: the feed payload, element locators and the
//! description of a single refresh.

pub mod entry;
pub mod locator;
pub mod refresh;

pub use entry::EntryCollection;
pub use locator::Locator;
pub use refresh::{RefreshId, RefreshOutcome, RefreshTarget};
