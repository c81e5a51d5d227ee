//! Notification Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A message informing a store of activity on its own shortages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    /// Flips false -> true exactly once, never reversed client-side.
    pub is_read: bool,
}
