//! Mock implementations of port traits
//!
//! In-memory feed source that answers from scripted responses and
//! records every URL it was asked for.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use tokio::sync::oneshot;

use crate::domain::entities::EntryCollection;
use crate::domain::ports::FeedSource;
use crate::error::RefreshError;

enum Scripted {
    Entries(Value),
    Failure { status: u16, message: String },
    Gated {
        gate: oneshot::Receiver<()>,
        entries: Value,
    },
}

// ============================================================================
// Mock Feed Source
// ============================================================================

/// Queued responses are consumed first, one per request. When a URL's
/// queue is empty the persistent response is used; with neither, the
/// request fails with a 404.
#[derive(Default)]
pub struct MockFeedSource {
    persistent: Mutex<HashMap<String, Value>>,
    queued: Mutex<HashMap<String, VecDeque<Scripted>>>,
    requests: Mutex<Vec<String>>,
}

impl MockFeedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every request for `url` with `entries`
    pub fn with_entries(self, url: &str, entries: Value) -> Self {
        self.persistent
            .lock()
            .unwrap()
            .insert(url.to_string(), entries);
        self
    }

    /// Answer the next request for `url` with an HTTP error
    pub fn with_failure(self, url: &str, status: u16, message: &str) -> Self {
        self.push(
            url,
            Scripted::Failure {
                status,
                message: message.to_string(),
            },
        );
        self
    }

    /// Answer the next request for `url` with `entries`
    pub fn push_entries(&self, url: &str, entries: Value) {
        self.push(url, Scripted::Entries(entries));
    }

    /// Answer the next request for `url` with `entries`, but only once the
    /// returned sender fires (or is dropped).
    pub fn push_gated(&self, url: &str, entries: Value) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.push(url, Scripted::Gated { gate: rx, entries });
        tx
    }

    /// URLs requested so far, in request order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn push(&self, url: &str, scripted: Scripted) {
        self.queued
            .lock()
            .unwrap()
            .entry(url.to_string())
            .or_default()
            .push_back(scripted);
    }

    fn next_response(&self, url: &str) -> Option<Scripted> {
        self.requests.lock().unwrap().push(url.to_string());

        let queued = self
            .queued
            .lock()
            .unwrap()
            .get_mut(url)
            .and_then(VecDeque::pop_front);

        queued.or_else(|| {
            self.persistent
                .lock()
                .unwrap()
                .get(url)
                .cloned()
                .map(Scripted::Entries)
        })
    }
}

#[async_trait]
impl FeedSource for MockFeedSource {
    async fn fetch(&self, feeds_url: &str) -> Result<EntryCollection, RefreshError> {
        match self.next_response(feeds_url) {
            Some(Scripted::Entries(entries)) => Ok(EntryCollection::new(entries)),
            Some(Scripted::Failure { status, message }) => {
                Err(RefreshError::Api { status, message })
            }
            Some(Scripted::Gated { gate, entries }) => {
                let _ = gate.await;
                Ok(EntryCollection::new(entries))
            }
            None => Err(RefreshError::Api {
                status: 404,
                message: format!("no scripted response for {}", feeds_url),
            }),
        }
    }
}
