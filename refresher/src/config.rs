use std::env;
use std::time::Duration;

use crate::domain::entities::{Locator, RefreshTarget};
use crate::error::ConfigError;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the feed server; relative feed paths are joined to it
    pub base_url: String,
    pub feed_path: String,
    pub template: Locator,
    pub destination: Locator,
    /// Manual refresh control, `None` when disabled
    pub trigger: Option<Locator>,
    /// Request timeout. Unset means wait indefinitely.
    pub timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; missing keys take their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = RefreshTarget::entries();

        let locator = |var: &'static str, default: Locator| match lookup(var) {
            Some(value) => {
                Locator::parse(&value).map_err(|source| ConfigError::Locator { var, source })
            }
            None => Ok(default),
        };

        let trigger = match lookup("ENTRIES_TRIGGER") {
            Some(value) if value.trim().is_empty() => None,
            Some(value) => Some(Locator::parse(&value).map_err(|source| ConfigError::Locator {
                var: "ENTRIES_TRIGGER",
                source,
            })?),
            None => Some(Locator::from_id("feedRefresh")),
        };

        let timeout = match lookup("ENTRIES_TIMEOUT_SECS") {
            Some(value) => Some(Duration::from_secs(value.trim().parse().map_err(|_| {
                ConfigError::Timeout {
                    var: "ENTRIES_TIMEOUT_SECS",
                    value: value.clone(),
                }
            })?)),
            None => None,
        };

        Ok(Self {
            base_url: lookup("ENTRIES_BASE_URL")
                .unwrap_or_else(|| "http://localhost:5000".to_string()),
            feed_path: lookup("ENTRIES_FEED_PATH").unwrap_or(defaults.feeds_url),
            template: locator("ENTRIES_TEMPLATE", defaults.template)?,
            destination: locator("ENTRIES_DESTINATION", defaults.destination)?,
            trigger,
            timeout,
        })
    }

    /// The refresh this configuration describes
    pub fn target(&self) -> RefreshTarget {
        RefreshTarget::new(
            self.feed_path.clone(),
            self.template.clone(),
            self.destination.clone(),
        )
    }
}
