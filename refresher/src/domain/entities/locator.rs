//! Element locators
//!
//! A locator names one element of the page by its `id` attribute,
//! written the way a selector would be: `#entries-table`.

use std::fmt;
use std::str::FromStr;

use crate::error::LocatorError;

/// `#id` reference to a single page element
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locator(String);

impl Locator {
    /// Parse a `#id` locator
    pub fn parse(s: &str) -> Result<Self, LocatorError> {
        let id = s
            .strip_prefix('#')
            .ok_or_else(|| LocatorError::MissingHash(s.to_string()))?;

        if id.is_empty() {
            return Err(LocatorError::EmptyId);
        }
        if id.chars().any(char::is_whitespace) {
            return Err(LocatorError::Whitespace(id.to_string()));
        }

        Ok(Self(id.to_string()))
    }

    /// Built-in locators are known-good ids.
    pub(crate) fn from_id(id: &'static str) -> Self {
        Self(id.to_string())
    }

    /// The element id, without the leading `#`
    pub fn id(&self) -> &str {
        &self.0
    }
}

impl FromStr for Locator {
    type Err = LocatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
