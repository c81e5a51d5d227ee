//! Shortage list screen state
//!
//! Raw set + filter + search term + the response dialog. A filter-type change
//! refetches; a search-term change only re-derives the displayed subset.

use std::sync::Arc;

use shared::models::Shortage;
use souq_client::ApiClient;

use crate::respond::{ResponseWorkflow, SubmitOutcome};
use crate::shortages::{ShortageFilter, ShortageRepository, can_respond};

#[derive(Debug)]
pub struct ShortageListScreen {
    repository: ShortageRepository,
    filter: ShortageFilter,
    search_term: String,
    loading: bool,
    error: Option<String>,
    workflow: ResponseWorkflow,
}

impl ShortageListScreen {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            repository: ShortageRepository::new(api),
            filter: ShortageFilter::default(),
            search_term: String::new(),
            loading: false,
            error: None,
            workflow: ResponseWorkflow::new(),
        }
    }

    pub fn filter(&self) -> ShortageFilter {
        self.filter
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn response_dialog(&self) -> &ResponseWorkflow {
        &self.workflow
    }

    /// Fetch the raw set for the current filter.
    ///
    /// On failure the error text replaces the loading state until the next
    /// load attempt.
    pub async fn load(&mut self) -> bool {
        self.loading = true;
        self.error = None;
        let result = self.repository.fetch(self.filter).await;
        self.loading = false;

        match result {
            Ok(()) => true,
            Err(e) => {
                self.error = Some(e.message());
                false
            }
        }
    }

    /// Change the list filter. Only a filter-type change triggers a refetch.
    pub async fn set_filter(&mut self, filter: ShortageFilter) {
        if self.filter != filter {
            self.filter = filter;
            self.load().await;
        }
    }

    /// Change the search term. Never triggers a network call.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Displayed subset for the current filter and search term.
    pub fn visible(&self, current_store_id: i64) -> Vec<&Shortage> {
        self.repository
            .visible(self.filter, &self.search_term, current_store_id)
    }

    /// Open the response dialog for `shortage_id`.
    ///
    /// Refused when the record is unknown, owned by the current store, or
    /// already fulfilled.
    pub fn open_response(&mut self, shortage_id: i64, current_store_id: i64) -> bool {
        let Some(shortage) = self
            .repository
            .shortages()
            .iter()
            .find(|s| s.id == shortage_id)
        else {
            return false;
        };
        if !can_respond(shortage, current_store_id) {
            return false;
        }

        self.workflow.open(shortage.clone());
        true
    }

    pub fn set_response_draft(&mut self, draft: impl Into<String>) {
        self.workflow.set_draft(draft);
    }

    pub fn cancel_response(&mut self) {
        self.workflow.close();
    }

    /// Submit the response draft.
    ///
    /// When the server accepts, the list refetches so the displayed state
    /// matches the server's ordering and any concurrent responders' writes.
    pub async fn send_response(&mut self) -> Option<SubmitOutcome> {
        let outcome = self.workflow.submit(&self.repository).await?;
        if matches!(outcome, SubmitOutcome::Sent) {
            self.load().await;
        }
        Some(outcome)
    }
}
