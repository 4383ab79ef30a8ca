//! HTTP adapter
//!
//! Fetches the entries feed from the REST endpoint with reqwest.

pub mod client;


pub use client::HttpFeedSource;
