// web_app/server_fns.rs - Search orchestration
//
// The one entry point the pages call for a search:
//
//   validate -> normalize -> remote (when configured and supported)
//            -> mock fallback on any remote failure
//
// A validation failure is the only error a caller sees. Remote failures are
// logged, turned into an advisory message and replaced by mock results, and
// the outcome is tagged with the path that produced it.

use chrono::{Local, NaiveDate};

use crate::web_app::api::config::AppConfig;
use crate::web_app::api::mock::MockProvider;
use crate::web_app::api::normalize::normalize_query;
use crate::web_app::api::remote::{RemoteFetcher, RemoteSource};
use crate::web_app::api::validate;
use crate::web_app::errors::ValidationError;
use crate::web_app::model::{SearchOutcome, SearchQuery, Source};

pub struct SearchService<R = RemoteFetcher> {
    remote: Option<R>,
    mock: MockProvider,
}

impl SearchService<RemoteFetcher> {
    /// Remote fetcher when `RAPIDAPI_KEY` is set, mock data otherwise
    pub fn from_config(config: &AppConfig) -> Self {
        let remote = match RemoteFetcher::from_config(config) {
            Ok(remote) => remote,
            Err(e) => {
                tracing::error!("Remote fetcher unavailable, using mock data only: {}", e);
                None
            }
        };
        Self::new(remote, MockProvider::from_config(config))
    }
}

impl<R: RemoteSource> SearchService<R> {
    pub fn new(remote: Option<R>, mock: MockProvider) -> Self {
        Self { remote, mock }
    }

    pub fn mock_only(mock: MockProvider) -> Self {
        Self::new(None, mock)
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    /// Search with dates judged against the local calendar date
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchOutcome, ValidationError> {
        self.search_on(query, Local::now().date_naive()).await
    }

    pub async fn search_on(
        &self,
        query: &SearchQuery,
        today: NaiveDate,
    ) -> Result<SearchOutcome, ValidationError> {
        let domain = query.domain();
        if let Err(e) = validate::check(query, today) {
            tracing::info!("Rejected {} search: {}", domain, e);
            return Err(e);
        }

        let normalized = normalize_query(query);
        tracing::info!("Search request: domain={}, query={:?}", domain, normalized.query());

        let remote = self.remote.as_ref().filter(|r| r.supports(domain));
        let advisory = match remote {
            Some(remote) => match remote.fetch(&normalized).await {
                Ok(results) => {
                    tracing::info!("Remote search successful: found {} {}", results.len(), domain);
                    return Ok(SearchOutcome {
                        domain,
                        source: Source::Remote,
                        results,
                        advisory: None,
                    });
                }
                Err(e) => {
                    tracing::warn!("Remote {} search failed, falling back to mock data: {}", domain, e);
                    Some(e.user_message(domain))
                }
            },
            None => {
                tracing::info!("No remote source for {}, using mock data", domain);
                None
            }
        };

        let results = self.mock.fetch(normalized.query()).await;
        Ok(SearchOutcome {
            domain,
            source: Source::Mock,
            results,
            advisory,
        })
    }
}
