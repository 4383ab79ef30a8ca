//! Domain layer
//!
//! Contains the refresher's models and the traits it needs from the outside.
//! - `entities`: payload, locators, refresh targets
//! - `ports`: Trait definitions for the feed and the page

pub mod entities;
pub mod ports;
