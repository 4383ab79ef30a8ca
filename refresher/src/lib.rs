//! Entries refresher
//!
//! Fetches a JSON feed of entries and renders it into a page element with
//! a Handlebars template taken from the page itself. Uses ports & adapters
//! so the network and the page can be swapped out.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod feed;

#[cfg(test)]
mod test_utils;


pub use adapters::{HttpFeedSource, PageDocument};
pub use app::{EntriesRefresher, RefreshController, RefreshHandle};
pub use config::Config;
pub use domain::entities::{EntryCollection, Locator, RefreshId, RefreshOutcome, RefreshTarget};
pub use domain::ports::{Document, FeedSource};
pub use error::{ConfigError, LocatorError, RefreshError};
