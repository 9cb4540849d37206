// common/mod.rs - Shared test utilities
//
// Fixed dates, query builders, and stub collaborators that count their
// calls so tests can assert when the network would have been touched.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{Duration, NaiveDate};
use travel_search::web_app::api::genai::TextGenerator;
use travel_search::web_app::api::mock::MockProvider;
use travel_search::web_app::api::remote::{RemoteFetcher, RemoteSource};
use travel_search::web_app::model::{
    Domain, FlightQuery, HotelQuery, NormalizedQuery, ResultSet, SearchQuery,
};
use travel_search::web_app::{FetchError, SearchService};

/// The calendar date every test treats as "today"
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

/// `today() + days` as `YYYY-MM-DD`
pub fn date_in(days: i64) -> String {
    (today() + Duration::days(days)).format("%Y-%m-%d").to_string()
}

pub fn flight(from: &str, to: &str, date: &str) -> SearchQuery {
    SearchQuery::Flight(FlightQuery {
        from: from.to_string(),
        to: to.to_string(),
        date: date.to_string(),
    })
}

pub fn hotel(destination: &str, nights_from_now: i64) -> SearchQuery {
    SearchQuery::Hotel(HotelQuery {
        destination: destination.to_string(),
        check_in: date_in(nights_from_now),
        check_out: date_in(nights_from_now + 2),
    })
}

/// Mock-only service with fixed prices and no latency
pub fn mock_service() -> SearchService<RemoteFetcher> {
    SearchService::mock_only(MockProvider::deterministic())
}

/// Remote source that always fails with a clone of `error`
pub struct FailingRemote {
    pub error: FetchError,
    pub calls: Arc<AtomicUsize>,
}

impl FailingRemote {
    pub fn new(error: FetchError) -> Self {
        Self {
            error,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl RemoteSource for FailingRemote {
    fn supports(&self, domain: Domain) -> bool {
        matches!(domain, Domain::Flights | Domain::Hotels | Domain::Cars)
    }

    async fn fetch(&self, _query: &NormalizedQuery) -> Result<ResultSet, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(self.error.clone())
    }
}

/// Text generator that records prompts and replies with a fixed text
#[derive(Clone)]
pub struct CountingGenerator {
    reply: Result<String, FetchError>,
    pub prompts: Arc<Mutex<Vec<String>>>,
}

impl CountingGenerator {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(error: FetchError) -> Self {
        Self {
            reply: Err(error),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

impl TextGenerator for CountingGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, FetchError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone()
    }
}
