//! Client-related types shared across the client crates
//!
//! Request/response DTOs matching the remote service's wire contract.
//! All bodies are JSON; error responses carry a `message` field.

use serde::{Deserialize, Serialize};

use crate::models::{Notification, Shortage, StoreInfo};

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub store: Option<StoreInfo>,
}

/// Session check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub logged_in: bool,
    pub store: Option<StoreInfo>,
}

/// Store registration payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub store_name: String,
}

/// Created-store confirmation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreCreated {
    pub store: StoreInfo,
}

// =============================================================================
// Shortage API DTOs
// =============================================================================

/// Optional list query parameters
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Shortage list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortageListResponse {
    pub shortages: Vec<Shortage>,
}

/// Respond-to-shortage request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RespondRequest {
    pub message: String,
}

// =============================================================================
// Notification API DTOs
// =============================================================================

/// Notification list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationListResponse {
    pub notifications: Vec<Notification>,
}

/// Unread-count response
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UnreadCountResponse {
    pub count: u64,
}

// =============================================================================
// Generic acknowledgment
// =============================================================================

/// Acknowledgment for discrete actions (respond, mark-read, logout)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}
