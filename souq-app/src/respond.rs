//! Response-submission dialog flow
//!
//! A dialog-scoped interaction keyed to exactly one selected shortage at a
//! time. Opening a new target discards the previous draft; there is no draft
//! persistence.

use shared::models::Shortage;

use crate::shortages::ShortageRepository;

/// Outcome of a submission attempt, surfaced as an acknowledgment.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The server accepted the response; the dialog has closed and the list
    /// must refetch.
    Sent,
    /// The submission failed; the dialog stays open with the draft retained
    /// so the actor can retry without retyping.
    Failed { message: String },
}

/// Response dialog state.
#[derive(Debug, Default)]
pub struct ResponseWorkflow {
    target: Option<Shortage>,
    draft: String,
    submitting: bool,
}

impl ResponseWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target(&self) -> Option<&Shortage> {
        self.target.as_ref()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Open the dialog for `shortage`, discarding any draft for a previous
    /// target.
    pub fn open(&mut self, shortage: Shortage) {
        self.target = Some(shortage);
        self.draft.clear();
    }

    /// Close the dialog, discarding target and draft.
    pub fn close(&mut self) {
        self.target = None;
        self.draft.clear();
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    /// Submission is enabled only with a target, a non-blank draft, and no
    /// submission already in flight.
    pub fn can_submit(&self) -> bool {
        self.target.is_some() && !self.draft.trim().is_empty() && !self.submitting
    }

    /// Submit the draft through `repository`.
    ///
    /// Guarded calls (blank draft, no target, already submitting) return
    /// `None` without issuing any network request.
    pub async fn submit(&mut self, repository: &ShortageRepository) -> Option<SubmitOutcome> {
        if !self.can_submit() {
            return None;
        }
        let target_id = self.target.as_ref()?.id;

        self.submitting = true;
        let result = repository.respond(target_id, &self.draft).await;
        self.submitting = false;

        Some(match result {
            Ok(()) => {
                self.close();
                SubmitOutcome::Sent
            }
            Err(e) => SubmitOutcome::Failed {
                message: e.message(),
            },
        })
    }
}
