//! Document port
//!
//! The page the refresher reads templates from and writes markup into.
//! Access is synchronous; implementations must make each write atomic.

use crate::domain::entities::Locator;
use crate::error::RefreshError;

pub trait Document: Send + Sync {
    /// Whether an element with this id exists
    fn contains(&self, locator: &Locator) -> bool;

    /// Raw inner markup of the element, `None` if it can't be found
    fn inner_html(&self, locator: &Locator) -> Option<String>;

    /// Replace the element's entire inner markup
    fn set_inner_html(&self, locator: &Locator, markup: &str) -> Result<(), RefreshError>;
}
