//! State of one case-listing screen.

use crate::error::ServiceError;
use crate::service::DisputeService;
use dispute_query::{CaseQuery, SearchMode};
use dispute_types::{Case, StatusFilter};
use std::sync::Arc;

/// Search text, status selector and loaded cases for a single listing.
///
/// Each browser owns its copy of the case list; opening a new browser loads
/// afresh. The visible list is re-evaluated from the loaded cases on every
/// call to [`visible`](Self::visible).
pub struct CaseBrowser {
    service: Arc<DisputeService>,
    cases: Vec<Case>,
    query: CaseQuery,
    loading: bool,
    refreshing: bool,
    last_error: Option<String>,
}

impl CaseBrowser {
    /// A browser that has not loaded yet (it starts in the loading state).
    pub fn new(service: Arc<DisputeService>) -> Self {
        Self {
            service,
            cases: Vec::new(),
            query: CaseQuery::all(),
            loading: true,
            refreshing: false,
            last_error: None,
        }
    }

    /// Use `mode` for subsequent searches.
    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.query = self.query.with_mode(mode);
        self
    }

    /// Load the case list. On failure the previous list is kept and the
    /// alert text is remembered in [`last_error`](Self::last_error).
    pub async fn load(&mut self) -> Result<(), ServiceError> {
        let result = self.service.fetch_cases().await;
        self.loading = false;
        self.refreshing = false;
        match result {
            Ok(cases) => {
                self.cases = cases;
                self.last_error = None;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "error fetching cases");
                self.last_error = Some(err.alert());
                Err(err)
            }
        }
    }

    /// Pull-to-refresh: reload while flagged as refreshing.
    pub async fn refresh(&mut self) -> Result<(), ServiceError> {
        self.refreshing = true;
        self.load().await
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = CaseQuery::new(text, self.query.status()).with_mode(self.query.mode());
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.query = CaseQuery::new(self.query.text(), filter).with_mode(self.query.mode());
    }

    pub fn query(&self) -> &CaseQuery {
        &self.query
    }

    /// Loaded cases that match the current search text and status selector.
    pub fn visible(&self) -> Vec<&Case> {
        self.query.apply_ref(&self.cases)
    }

    pub fn loaded(&self) -> &[Case] {
        &self.cases
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
