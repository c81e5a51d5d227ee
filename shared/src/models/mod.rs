//! Domain models
//!
//! Entities owned by the remote service. The client holds read-only,
//! refetchable copies; each fetch replaces the previous in-memory set.

mod notification;
mod shortage;
mod store;

pub use notification::Notification;
pub use shortage::{Shortage, ShortageCreate, ShortageResponse, Unit};
pub use store::StoreInfo;
