//! Store Model

use serde::{Deserialize, Serialize};

/// The authenticated actor: a retail shop account.
///
/// Identity is established once per session and stays immutable for that
/// session's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreInfo {
    pub id: i64,
    pub username: String,
}
