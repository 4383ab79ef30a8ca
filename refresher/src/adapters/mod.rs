//! Adapters layer
//!
//! Implementations of port traits for the network and the page.

pub mod http;
pub mod page;

pub use http::HttpFeedSource;
pub use page::PageDocument;
