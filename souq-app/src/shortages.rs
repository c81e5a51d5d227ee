//! Shortage fetch, filter, and search
//!
//! The repository holds the raw set for one screen instance; the displayed
//! subset is a pure derivation from (raw set, filter, search term) and is
//! recomputed on input change, never mutated in place.

use std::sync::Arc;

use shared::models::Shortage;
use souq_client::{ApiClient, ClientError, ClientResult};

/// Validation text for a blank response message.
pub const EMPTY_RESPONSE_MESSAGE: &str = "response message must not be empty";

/// List filter selected on the shortage list screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShortageFilter {
    #[default]
    All,
    /// Shortages owned by the current store; fetched from its own endpoint.
    Mine,
    /// Shortages the current store has responded to. Reuses the full fetch
    /// and applies a client-side predicate.
    RespondedByMe,
}

/// Client-held copy of the shortage set.
///
/// Every fetch replaces the set wholesale; nothing is merged or spliced.
#[derive(Debug)]
pub struct ShortageRepository {
    api: Arc<ApiClient>,
    shortages: Vec<Shortage>,
}

impl ShortageRepository {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            shortages: Vec::new(),
        }
    }

    pub fn shortages(&self) -> &[Shortage] {
        &self.shortages
    }

    /// Fetch the raw set for `filter`, replacing the previous set.
    ///
    /// Exactly one gateway call per invocation; `RespondedByMe` reuses the
    /// full fetch and filters later, client-side.
    pub async fn fetch(&mut self, filter: ShortageFilter) -> ClientResult<()> {
        self.shortages = match filter {
            ShortageFilter::Mine => self.api.my_shortages(None).await?,
            ShortageFilter::All | ShortageFilter::RespondedByMe => {
                self.api.shortages(None).await?
            }
        };
        Ok(())
    }

    /// Displayed subset for the given filter and search term.
    pub fn visible(
        &self,
        filter: ShortageFilter,
        search_term: &str,
        current_store_id: i64,
    ) -> Vec<&Shortage> {
        visible_shortages(&self.shortages, filter, search_term, current_store_id)
    }

    /// Send a response to a shortage.
    ///
    /// A message that is empty after trimming never reaches the network.
    /// On success the caller must refetch; the new response is not spliced
    /// into the local set, so the displayed ordering stays the server's.
    pub async fn respond(&self, shortage_id: i64, message: &str) -> ClientResult<()> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ClientError::Validation(EMPTY_RESPONSE_MESSAGE.to_string()));
        }

        self.api.respond_to_shortage(shortage_id, message).await?;
        Ok(())
    }
}

/// Whether the current store may respond to `shortage`.
///
/// Owners never respond to their own records, and fulfilled records take no
/// further responses.
pub fn can_respond(shortage: &Shortage, current_store_id: i64) -> bool {
    shortage.store_id != current_store_id && !shortage.is_fulfilled
}

/// Pure derivation from (raw set, filter, search term) to the displayed set.
///
/// The search predicate is independent of the filter predicate and applied
/// conjunctively; an empty term matches everything.
pub fn visible_shortages<'a>(
    shortages: &'a [Shortage],
    filter: ShortageFilter,
    search_term: &str,
    current_store_id: i64,
) -> Vec<&'a Shortage> {
    shortages
        .iter()
        .filter(|shortage| {
            let matches_filter = match filter {
                ShortageFilter::RespondedByMe => shortage
                    .responses
                    .iter()
                    .any(|response| response.store_id == current_store_id),
                ShortageFilter::All | ShortageFilter::Mine => true,
            };
            matches_filter && matches_search(shortage, search_term)
        })
        .collect()
}

/// Case-insensitive substring match on product name or store name.
fn matches_search(shortage: &Shortage, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    shortage.product_name.to_lowercase().contains(&term)
        || shortage.store_name.to_lowercase().contains(&term)
}
