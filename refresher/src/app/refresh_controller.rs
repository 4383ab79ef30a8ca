//! Refresh triggers
//!
//! Wires one refresh target to the page lifecycle: a one-shot
//! document-ready hook plus an optional refresh control that re-runs the
//! same refresh on activation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::Config;
use crate::domain::entities::{Locator, RefreshTarget};
use crate::domain::ports::{Document, FeedSource};
use crate::error::RefreshError;

use super::entries_refresher::{EntriesRefresher, RefreshHandle};

pub struct RefreshController<F: FeedSource, D: Document> {
    refresher: Arc<EntriesRefresher<F, D>>,
    target: RefreshTarget,
    trigger: Option<Locator>,
    ready: AtomicBool,
}

impl<F, D> RefreshController<F, D>
where
    F: FeedSource + 'static,
    D: Document + 'static,
{
    pub fn new(refresher: Arc<EntriesRefresher<F, D>>, target: RefreshTarget) -> Self {
        Self {
            refresher,
            target,
            trigger: None,
            ready: AtomicBool::new(false),
        }
    }

    /// Controller for the configured target, with the configured control
    /// bound when there is one.
    pub fn from_config(
        refresher: Arc<EntriesRefresher<F, D>>,
        config: &Config,
    ) -> Result<Self, RefreshError> {
        let mut controller = Self::new(refresher, config.target());
        if let Some(trigger) = &config.trigger {
            controller.bind_trigger(trigger.clone())?;
        }
        Ok(controller)
    }

    pub fn target(&self) -> &RefreshTarget {
        &self.target
    }

    /// Attach the refresh to a control on the page
    pub fn bind_trigger(&mut self, control: Locator) -> Result<(), RefreshError> {
        if !self.refresher.document().contains(&control) {
            return Err(RefreshError::TriggerNotFound(control.to_string()));
        }

        tracing::debug!(control = %control, "Refresh control bound");
        self.trigger = Some(control);
        Ok(())
    }

    /// Page finished loading. Only the first call refreshes.
    pub fn document_ready(&self) -> Option<RefreshHandle> {
        if self.ready.swap(true, Ordering::SeqCst) {
            return None;
        }

        tracing::debug!("Document ready, running initial refresh");
        Some(self.refresher.spawn_refresh(self.target.clone()))
    }

    /// The user activated `control`
    pub fn activate(&self, control: &Locator) -> Result<RefreshHandle, RefreshError> {
        match &self.trigger {
            Some(bound) if bound == control => {
                tracing::debug!(control = %control, "Manual refresh");
                Ok(self.refresher.spawn_refresh(self.target.clone()))
            }
            _ => Err(RefreshError::TriggerNotBound(control.to_string())),
        }
    }
}
