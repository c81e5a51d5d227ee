//! Notifications screen state

use std::sync::Arc;

use shared::models::Notification;
use souq_client::ApiClient;

use crate::notifications::NotificationList;

#[derive(Debug)]
pub struct NotificationsScreen {
    list: NotificationList,
    loading: bool,
    error: Option<String>,
}

impl NotificationsScreen {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            list: NotificationList::new(api),
            loading: false,
            error: None,
        }
    }

    pub fn notifications(&self) -> &[Notification] {
        self.list.notifications()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Fetch the notification list.
    pub async fn load(&mut self) -> bool {
        self.loading = true;
        self.error = None;
        let result = self.list.refresh().await;
        self.loading = false;

        match result {
            Ok(()) => true,
            Err(e) => {
                self.error = Some(e.message());
                false
            }
        }
    }

    /// Mark a notification read and refetch the list.
    ///
    /// A failure is returned as the acknowledgment text to surface; the list
    /// keeps its previous contents.
    pub async fn mark_read(&mut self, notification_id: i64) -> Result<(), String> {
        self.list
            .mark_read(notification_id)
            .await
            .map_err(|e| e.message())
    }
}
