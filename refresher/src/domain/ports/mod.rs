//! Domain ports (traits)
//!
//! Port traits define interfaces that the refresher requires.
//! Adapters provide concrete implementations of these traits.

pub mod document;
pub mod feed;

pub use document::Document;
pub use feed::FeedSource;
