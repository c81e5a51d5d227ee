//! Souq Client - HTTP gateway to the shortage-exchange service
//!
//! Wraps every remote call in one uniform request/response/error contract.
//! The session credential is a cookie carried automatically by the underlying
//! HTTP client.

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::ApiClient;

// Re-export shared types for convenience
pub use shared::client::{Ack, ListQuery, SessionResponse};
pub use shared::models::{Notification, Shortage, ShortageCreate, StoreInfo, Unit};
