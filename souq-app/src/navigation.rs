//! Screen navigation state machine
//!
//! A finite-state machine over the fixed screen set. Screens issue
//! `NavRequest`s to the controller instead of knowing their siblings; there is
//! no history stack, so "back" always lands on the main screen.

use serde::Serialize;

/// Screens the client can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    #[default]
    Login,
    Main,
    AddShortage,
    ShortageList,
    Notifications,
}

/// Navigation request issued by the active screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRequest {
    /// Go to a specific screen. Each screen may only request the screens it
    /// links to; anything else falls back to the login screen.
    To(Screen),
    /// Return to the main screen.
    Back,
    /// End the session; always lands on the login screen.
    Logout,
}

/// Finite-state screen router.
///
/// `Login` is the only state reachable while anonymous; every other screen
/// requires an authenticated session.
#[derive(Debug, Default)]
pub struct NavigationController {
    current: Screen,
}

impl NavigationController {
    pub fn new() -> Self {
        Self {
            current: Screen::Login,
        }
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    /// Apply a navigation request and return the new active screen.
    ///
    /// Unknown or unroutable requests fall back to the login screen.
    pub fn navigate(&mut self, request: NavRequest, authenticated: bool) -> Screen {
        let next = Self::resolve(self.current, request, authenticated);
        if next != self.current {
            tracing::debug!(from = ?self.current, to = ?next, "Navigating");
        }
        self.current = next;
        next
    }

    fn resolve(current: Screen, request: NavRequest, authenticated: bool) -> Screen {
        if !authenticated {
            return Screen::Login;
        }

        match (current, request) {
            (_, NavRequest::Logout) => Screen::Login,
            (_, NavRequest::Back) => Screen::Main,
            (
                Screen::Main,
                NavRequest::To(
                    target @ (Screen::AddShortage | Screen::ShortageList | Screen::Notifications),
                ),
            ) => target,
            (
                Screen::AddShortage | Screen::ShortageList | Screen::Notifications,
                NavRequest::To(Screen::Main),
            ) => Screen::Main,
            // Post-login entry into the main screen.
            (Screen::Login, NavRequest::To(Screen::Main)) => Screen::Main,
            _ => Screen::Login,
        }
    }
}
