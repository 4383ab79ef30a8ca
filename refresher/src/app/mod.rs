//! Application layer
//!
//! The refresh use case and the triggers that start it.

pub mod entries_refresher;
pub mod refresh_controller;

pub use entries_refresher::{EntriesRefresher, RefreshHandle};
pub use refresh_controller::RefreshController;
