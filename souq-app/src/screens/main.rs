//! Main screen state
//!
//! Owns the unread-count poller for as long as the screen is mounted; at most
//! one poller exists per mounted main screen.

use std::sync::Arc;
use std::time::Duration;

use souq_client::ApiClient;

use crate::notifications::{PollerHandle, UNREAD_POLL_PERIOD, spawn_unread_poller};

#[derive(Debug)]
pub struct MainScreen {
    poller: PollerHandle,
}

impl MainScreen {
    /// Mount the screen, starting the background unread-count refresh.
    pub fn mount(api: Arc<ApiClient>) -> Self {
        Self::mount_with_period(api, UNREAD_POLL_PERIOD)
    }

    pub fn mount_with_period(api: Arc<ApiClient>, period: Duration) -> Self {
        Self {
            poller: spawn_unread_poller(api, period),
        }
    }

    /// Latest unread notification count for the badge.
    pub fn unread_count(&self) -> u64 {
        self.poller.unread_count()
    }

    pub fn poller(&self) -> &PollerHandle {
        &self.poller
    }

    /// Unmount the screen, stopping the poller.
    pub fn unmount(self) {
        self.poller.cancel();
    }
}
