//! HTTP feed client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;

use crate::config::Config;
use crate::domain::entities::EntryCollection;
use crate::domain::ports::FeedSource;
use crate::error::RefreshError;

/// Feed source backed by a plain GET against the feed server
#[derive(Clone)]
pub struct HttpFeedSource {
    http: Client,
    base_url: String,
}

impl HttpFeedSource {
    /// Create a client for the server at `base_url`, without a timeout
    pub fn new(base_url: &str) -> Result<Self, RefreshError> {
        Self::with_timeout(base_url, None)
    }

    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self, RefreshError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, RefreshError> {
        Self::with_timeout(&config.base_url, config.timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URLs pass through; paths are joined to the base URL.
    fn resolve(&self, feeds_url: &str) -> String {
        if feeds_url.starts_with("http://") || feeds_url.starts_with("https://") {
            feeds_url.to_string()
        } else if feeds_url.starts_with('/') {
            format!("{}{}", self.base_url, feeds_url)
        } else {
            format!("{}/{}", self.base_url, feeds_url)
        }
    }

    async fn handle_response(response: reqwest::Response) -> Result<EntryCollection, RefreshError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(RefreshError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        serde_json::from_str(&body).map_err(|e| RefreshError::Decode(e.to_string()))
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch(&self, feeds_url: &str) -> Result<EntryCollection, RefreshError> {
        let url = self.resolve(feeds_url);
        tracing::debug!(%url, "GET feed");

        let response = self.http.get(&url).send().await?;
        Self::handle_response(response).await
    }
}
