// web_app/api/mock.rs - Mock provider
//
// Serves the fixture tables after a simulated network delay. Never fails.

use std::time::Duration;

use rand::Rng;
use rust_decimal::prelude::*;

use crate::fixtures::tables::{CarsTable, FlightsTable, HotelsTable, ProductsTable, TrainsTable};
use crate::fixtures::MockTable;
use crate::web_app::api::config::AppConfig;
use crate::web_app::model::{ResultSet, SearchQuery, SearchResult};

/// Multiplicative bounds for randomised prices
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceJitter {
    pub min_factor: f64,
    pub max_factor: f64,
}

impl Default for PriceJitter {
    fn default() -> Self {
        Self {
            min_factor: 0.8,
            max_factor: 1.2,
        }
    }
}

impl PriceJitter {
    /// Scale `price` by a random factor in `[min_factor, max_factor]`.
    ///
    /// The result is rounded to whole units and never drops below one unit.
    pub fn apply(&self, price: Decimal, rng: &mut impl Rng) -> Decimal {
        if price <= Decimal::ZERO || self.max_factor <= self.min_factor {
            return price;
        }
        let factor = rng.gen_range(self.min_factor..=self.max_factor);
        let scaled = Decimal::from_f64(factor)
            .map(|f| (price * f).round())
            .unwrap_or(price);
        scaled.max(Decimal::ONE)
    }
}

#[derive(Clone, Debug)]
pub struct MockProvider {
    delay: Duration,
    jitter: Option<PriceJitter>,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(1500),
            jitter: Some(PriceJitter::default()),
        }
    }
}

impl MockProvider {
    pub fn new(delay: Duration, jitter: Option<PriceJitter>) -> Self {
        Self { delay, jitter }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.mock_delay, Some(PriceJitter::default()))
    }

    /// Fixed prices and no delay
    pub fn deterministic() -> Self {
        Self::new(Duration::ZERO, None)
    }

    pub async fn fetch(&self, query: &SearchQuery) -> ResultSet {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let mut rows = base_rows(query);
        if let Some(jitter) = self.jitter {
            let mut rng = rand::thread_rng();
            for row in rows.iter_mut() {
                row.price = jitter.apply(row.price, &mut rng);
            }
        }

        tracing::info!("Mock provider returned {} {} results", rows.len(), query.domain());
        rows.into()
    }
}

fn base_rows(query: &SearchQuery) -> Vec<SearchResult> {
    match query {
        SearchQuery::Flight(q) => {
            let route = format!("{} → {}", q.from.trim(), q.to.trim());
            FlightsTable::select("")
                .into_iter()
                .map(|mut f| {
                    f.main_info = route.clone();
                    f
                })
                .collect()
        }
        SearchQuery::Hotel(q) => HotelsTable::select(&q.destination),
        SearchQuery::Car(_) => CarsTable::select(""),
        SearchQuery::Train(_) => TrainsTable::select(""),
        SearchQuery::Marketplace(_) => ProductsTable::select(""),
    }
}
