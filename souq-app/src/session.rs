//! Session lifecycle state machine
//!
//! Tracks whether the client holds an authenticated session and drives the
//! initial session check. Mutating operations take `&mut self`, so at most
//! one session-state mutation (check, login, or logout) can be in flight per
//! controller instance.

use std::sync::Arc;

use shared::models::StoreInfo;
use souq_client::{ApiClient, ClientError};

/// Fallback text when a login failure carries no server message.
pub const LOGIN_FALLBACK_MESSAGE: &str = "login failed, check your username and password";

/// Session lifecycle states.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    /// Initial session check has not completed yet.
    #[default]
    Checking,
    /// An active session exists; the store identity is fixed until logout.
    Authenticated(StoreInfo),
    /// No active session; only the login screen is reachable.
    Anonymous,
}

/// Outcome of a login attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    Success,
    Failed { message: String },
}

/// Tracks login state and issues session calls through the gateway.
#[derive(Debug)]
pub struct SessionController {
    api: Arc<ApiClient>,
    state: SessionState,
}

impl SessionController {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            state: SessionState::Checking,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated(_))
    }

    pub fn current_store(&self) -> Option<&StoreInfo> {
        match &self.state {
            SessionState::Authenticated(store) => Some(store),
            _ => None,
        }
    }

    /// Run the session check. An active session transitions to
    /// `Authenticated`; no session or any error transitions to `Anonymous`.
    ///
    /// Returns whether the session ended up authenticated.
    pub async fn check(&mut self) -> bool {
        self.state = SessionState::Checking;

        self.state = match self.api.check_session().await {
            Ok(session) => match session.store {
                Some(store) if session.logged_in => {
                    tracing::info!(store = %store.username, "Session restored");
                    SessionState::Authenticated(store)
                }
                _ => SessionState::Anonymous,
            },
            Err(e) => {
                tracing::warn!(error = %e, "Session check failed");
                SessionState::Anonymous
            }
        };

        self.is_authenticated()
    }

    /// Exchange credentials for a session. On failure the state stays
    /// `Anonymous` and the outcome carries the server's message, or a fixed
    /// fallback when none was supplied.
    pub async fn login(&mut self, username: &str, password: &str) -> LoginOutcome {
        match self.api.login(username, password).await {
            Ok(store) => {
                tracing::info!(store = %store.username, "Logged in");
                self.state = SessionState::Authenticated(store);
                LoginOutcome::Success
            }
            Err(e) => {
                self.state = SessionState::Anonymous;
                let message = match &e {
                    ClientError::Server { message, .. } if !message.is_empty() => message.clone(),
                    _ => LOGIN_FALLBACK_MESSAGE.to_string(),
                };
                LoginOutcome::Failed { message }
            }
        }
    }

    /// End the session. The remote call is fire-and-forget: a failure is
    /// logged and never blocks the local transition to `Anonymous`.
    pub async fn logout(&mut self) {
        if let Err(e) = self.api.logout().await {
            tracing::warn!(error = %e, "Logout request failed");
        }
        self.state = SessionState::Anonymous;
        tracing::info!("Logged out");
    }
}
