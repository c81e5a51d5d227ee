//! Shared types for the Souq shortage-exchange client
//!
//! Domain models and request/response DTOs used across the client crates.

pub mod client;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use client::{
    Ack, ListQuery, LoginRequest, LoginResponse, NotificationListResponse, RegisterRequest,
    RespondRequest, SessionResponse, ShortageListResponse, StoreCreated, UnreadCountResponse,
};
pub use models::{Notification, Shortage, ShortageCreate, ShortageResponse, StoreInfo, Unit};
