//! Notification fetch, read-marking, and unread-count polling
//!
//! Two refresh rhythms: an on-demand full list fetch for the notifications
//! screen, and a background unread-count refresh that runs while the main
//! screen is mounted and stops the instant it is left.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use shared::models::Notification;
use souq_client::{ApiClient, ClientResult};

/// Unread-count refresh period while the main screen is mounted.
pub const UNREAD_POLL_PERIOD: Duration = Duration::from_secs(30);

/// Client-held copy of the notification list.
#[derive(Debug)]
pub struct NotificationList {
    api: Arc<ApiClient>,
    notifications: Vec<Notification>,
}

impl NotificationList {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            notifications: Vec::new(),
        }
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Fetch the full list, replacing the previous one. No merging.
    pub async fn refresh(&mut self) -> ClientResult<()> {
        self.notifications = self.api.notifications(None).await?;
        Ok(())
    }

    /// Mark one notification read, then refetch the full list.
    ///
    /// The flag is never flipped locally; the extra round trip keeps the
    /// read/unread state consistent with the server's view.
    pub async fn mark_read(&mut self, notification_id: i64) -> ClientResult<()> {
        self.api.mark_notification_read(notification_id).await?;
        self.refresh().await
    }
}

/// Handle to a running unread-count poller.
///
/// The owning screen cancels it on teardown. Dropping the handle also
/// cancels, so a dismounted screen never leaks its timer.
#[derive(Debug)]
pub struct PollerHandle {
    token: CancellationToken,
    task: JoinHandle<()>,
    count: watch::Receiver<u64>,
}

impl PollerHandle {
    /// Latest unread count delivered by the poller.
    pub fn unread_count(&self) -> u64 {
        *self.count.borrow()
    }

    /// Receiver for observing count updates.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.count.clone()
    }

    /// Stop the poller. No further count fetches are issued once the task
    /// observes the cancellation.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Spawn the background unread-count refresh loop.
///
/// Fetches immediately, then once per `period`. Fetch failures are logged and
/// swallowed: the count merely goes stale, the screen stays intact.
pub fn spawn_unread_poller(api: Arc<ApiClient>, period: Duration) -> PollerHandle {
    let (tx, rx) = watch::channel(0);
    let token = CancellationToken::new();
    let poll_token = token.clone();

    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        loop {
            tokio::select! {
                _ = poll_token.cancelled() => {
                    tracing::debug!("Unread-count poller stopped");
                    break;
                }
                _ = ticker.tick() => {
                    match api.unread_count().await {
                        Ok(count) => {
                            let _ = tx.send(count);
                        }
                        Err(e) => {
                            tracing::warn!(error = %e, "Unread-count refresh failed");
                        }
                    }
                }
            }
        }
    });

    PollerHandle {
        token,
        task,
        count: rx,
    }
}
