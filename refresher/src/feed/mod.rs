//! Feed module
//!
//! Template rendering for fetched entry collections.

pub mod renderer;

pub use renderer::render_entries;
