//! Login screen state

use crate::session::{LoginOutcome, SessionController};

/// Login form state. Submission delegates to the session controller.
#[derive(Debug, Default)]
pub struct LoginScreen {
    pub username: String,
    pub password: String,
    error: Option<String>,
    busy: bool,
}

impl LoginScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Attempt login with the entered credentials.
    ///
    /// Returns whether the session became authenticated; on failure the
    /// error text is retained for display.
    pub async fn submit(&mut self, session: &mut SessionController) -> bool {
        self.error = None;
        self.busy = true;
        let outcome = session.login(&self.username, &self.password).await;
        self.busy = false;

        match outcome {
            LoginOutcome::Success => {
                self.password.clear();
                true
            }
            LoginOutcome::Failed { message } => {
                self.error = Some(message);
                false
            }
        }
    }
}
