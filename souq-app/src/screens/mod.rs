//! Per-screen state and data-fetch logic
//!
//! Each screen owns its loading/error state and the data components it uses.
//! Rendering is out of scope; these are the state machines behind the views.

mod add_shortage;
mod login;
mod main;
mod notifications;
mod shortage_list;

pub use add_shortage::{AddShortageScreen, Feedback};
pub use login::LoginScreen;
pub use main::MainScreen;
pub use notifications::NotificationsScreen;
pub use shortage_list::ShortageListScreen;
