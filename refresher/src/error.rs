//! Error types for the entries refresher
//!
//! - `RefreshError`: everything that can stop a fetch-render-write cycle
//! - `LocatorError`: malformed `#id` locators
//! - `ConfigError`: bad environment configuration

use thiserror::Error;

/// Locator parse errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocatorError {
    #[error("Locator must start with '#': {0:?}")]
    MissingHash(String),

    #[error("Locator has an empty id")]
    EmptyId,

    #[error("Locator id contains whitespace: {0:?}")]
    Whitespace(String),
}

/// Refresh errors
///
/// Transport and payload failures leave the destination untouched.
/// The `*NotFound` / `*NotBound` variants are wiring mistakes and are
/// reported before any markup is written.
#[derive(Debug, Error)]
pub enum RefreshError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Response is not JSON: {0}")]
    Decode(String),

    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Destination not found: {0}")]
    DestinationNotFound(String),

    #[error("Trigger control not found: {0}")]
    TriggerNotFound(String),

    #[error("No refresh bound to control: {0}")]
    TriggerNotBound(String),

    #[error("Template compile error: {0}")]
    Template(String),

    #[error("Template render error: {0}")]
    Render(String),

    #[error("Invalid locator: {0}")]
    InvalidLocator(#[from] LocatorError),
}

impl From<handlebars::TemplateError> for RefreshError {
    fn from(e: handlebars::TemplateError) -> Self {
        RefreshError::Template(e.to_string())
    }
}

impl From<handlebars::RenderError> for RefreshError {
    fn from(e: handlebars::RenderError) -> Self {
        RefreshError::Render(e.to_string())
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var}: {source}")]
    Locator {
        var: &'static str,
        #[source]
        source: LocatorError,
    },

    #[error("{var} must be a whole number of seconds, got {value:?}")]
    Timeout { var: &'static str, value: String },
}
