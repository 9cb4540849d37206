// web_app/pages/search.rs - Search page controller
//
// Owns the form's filter state and the last accepted result set. Searches
// are tagged with a monotonically increasing request id; an outcome that
// arrives after a newer request was started is dropped.

use std::sync::Arc;

use crate::web_app::api::queries;
use crate::web_app::api::remote::{RemoteFetcher, RemoteSource};
use crate::web_app::errors::ValidationError;
use crate::web_app::model::{
    FilterState, ResultSet, SearchOutcome, SearchQuery, SearchResult, SortOption, Source,
};
use crate::web_app::server_fns::SearchService;

/// Identifies one in-flight search
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

pub struct SearchPage<R = RemoteFetcher> {
    service: Arc<SearchService<R>>,
    filters: FilterState,
    results: ResultSet,
    visible: Vec<SearchResult>,
    source: Option<Source>,
    advisory: Option<String>,
    errors: Vec<String>,
    latest: u64,
    loading: bool,
}

impl<R: RemoteSource> SearchPage<R> {
    pub fn new(service: Arc<SearchService<R>>) -> Self {
        Self {
            service,
            filters: FilterState::default(),
            results: ResultSet::default(),
            visible: Vec::new(),
            source: None,
            advisory: None,
            errors: Vec::new(),
            latest: 0,
            loading: false,
        }
    }

    /// Shared handle for running a search outside the page, see
    /// [`begin_request`](Self::begin_request)
    pub fn service(&self) -> Arc<SearchService<R>> {
        Arc::clone(&self.service)
    }

    pub fn begin_request(&mut self) -> RequestTicket {
        self.latest += 1;
        self.loading = true;
        self.errors.clear();
        RequestTicket(self.latest)
    }

    /// Apply a finished search. Returns false when a newer request has been
    /// started since `ticket` was issued.
    pub fn complete_request(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<SearchOutcome, ValidationError>,
    ) -> bool {
        if ticket.0 != self.latest {
            tracing::warn!(
                "Discarding stale search response (request {}, latest {})",
                ticket.0,
                self.latest
            );
            return false;
        }
        self.loading = false;

        match outcome {
            Ok(outcome) => {
                self.source = Some(outcome.source);
                self.advisory = outcome.advisory;
                self.results = outcome.results;
                self.errors.clear();
            }
            Err(e) => {
                self.errors = e.violations;
            }
        }
        self.refresh();
        true
    }

    pub async fn submit(&mut self, query: &SearchQuery) -> bool {
        let ticket = self.begin_request();
        let outcome = self.service.search(query).await;
        self.complete_request(ticket, outcome)
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn set_filters(&mut self, filters: FilterState) {
        self.filters = filters;
        self.refresh();
    }

    pub fn update_filters(&mut self, update: impl FnOnce(&mut FilterState)) {
        update(&mut self.filters);
        self.refresh();
    }

    pub fn set_sort(&mut self, sort: SortOption) {
        self.filters.sort_by = sort;
        self.refresh();
    }

    pub fn clear_filters(&mut self) {
        let sort = self.filters.sort_by;
        self.filters = FilterState {
            sort_by: sort,
            ..FilterState::default()
        };
        self.refresh();
    }

    fn refresh(&mut self) {
        self.visible = queries::apply(&self.results, &self.filters);
    }

    /// Filtered and sorted view of the current results
    pub fn visible(&self) -> &[SearchResult] {
        &self.visible
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    pub fn source(&self) -> Option<Source> {
        self.source
    }

    pub fn advisory(&self) -> Option<&str> {
        self.advisory.as_deref()
    }

    /// Validation violations from the last submission
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
