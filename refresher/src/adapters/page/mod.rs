//! Page adapter
//!
//! An HTML page held in memory, addressed by element ids.

pub mod document;

pub use document::PageDocument;
