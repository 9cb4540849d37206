// web_app/api/remote.rs - Travel-data provider client
//
// Flights are a single GET. Hotels and cars are two chained requests: the
// first resolves a free-text location into provider identifiers, the second
// searches with them. Provider JSON is read through the `Value` helpers at
// the bottom of this file and never leaves this module untyped.

use std::collections::HashSet;
use std::future::Future;

use rand::Rng;
use reqwest::Client;
use rust_decimal::prelude::*;
use serde_json::Value;

use crate::web_app::api::config::{create_client, AppConfig};
use crate::web_app::errors::FetchError;
use crate::web_app::model::{
    CarQuery, Currency, Domain, FlightQuery, HotelQuery, NormalizedQuery, ResultSet, SearchQuery,
    SearchResult,
};

/// Shown when the provider sends no photo
pub const PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1566073771259-6a8506099945?auto=format&fit=crop&w=800&q=80";

/// A remote search backend for some subset of domains
pub trait RemoteSource: Send + Sync {
    fn supports(&self, domain: Domain) -> bool;

    fn fetch(
        &self,
        query: &NormalizedQuery,
    ) -> impl Future<Output = Result<ResultSet, FetchError>> + Send;
}

/// Client for the RapidAPI-hosted booking provider
#[derive(Clone, Debug)]
pub struct RemoteFetcher {
    client: Client,
    api_key: String,
    base_url: String,
    host: String,
    max_results: usize,
}

impl RemoteFetcher {
    pub fn new(
        client: Client,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        host: impl Into<String>,
        max_results: usize,
    ) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            host: host.into(),
            max_results,
        }
    }

    /// Returns `Ok(None)` when no API key is configured
    pub fn from_config(config: &AppConfig) -> Result<Option<Self>, FetchError> {
        let Some(key) = config.rapidapi_key.clone() else {
            return Ok(None);
        };
        let client = create_client(config)?;
        Ok(Some(Self::new(
            client,
            key,
            config.travel_api_base_url.clone(),
            config.travel_api_host.clone(),
            config.max_remote_results,
        )))
    }

    async fn get_json(&self, path: &str, params: &[(&str, String)]) -> Result<Value, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {} ({} params)", url, params.len());

        let response = self
            .client
            .get(&url)
            .query(params)
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", &self.host)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Provider returned HTTP {} for {}: {}", status.as_u16(), path, body);
            return Err(FetchError::from_status(status.as_u16(), body));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn search_flights(&self, query: &FlightQuery) -> Result<ResultSet, FetchError> {
        let params = [
            ("from_airport_iata", query.from.clone()),
            ("to_airport_iata", query.to.clone()),
            ("departure_date", query.date.clone()),
            ("number_of_adults", "1".to_string()),
            ("locale", "en-us".to_string()),
            ("currency", "USD".to_string()),
        ];
        let data = self.get_json("/v1/flights/search", &params).await?;

        let flights = ["flights", "data", "results"]
            .iter()
            .find_map(|k| data.get(*k).and_then(Value::as_array))
            .cloned()
            .unwrap_or_default();
        if flights.is_empty() {
            tracing::warn!("No flights in provider response for {} → {}", query.from, query.to);
        }

        Ok(with_unique_ids(
            flights
                .iter()
                .take(self.max_results)
                .enumerate()
                .map(|(i, raw)| map_flight(i, raw, query))
                .collect(),
        ))
    }

    async fn search_hotels(&self, query: &HotelQuery) -> Result<ResultSet, FetchError> {
        let locations = self
            .get_json(
                "/v1/hotels/locations",
                &[("name", query.destination.clone()), ("locale", "en-gb".to_string())],
            )
            .await?;
        let first = locations.as_array().and_then(|a| a.first());
        let dest_id = first.and_then(|l| text_at(l, "/dest_id"));
        let (Some(dest_id), Some(first)) = (dest_id, first) else {
            return Err(FetchError::LocationNotFound(query.destination.clone()));
        };
        let dest_type = text_at(first, "/dest_type").unwrap_or_else(|| "city".to_string());

        let params = [
            ("dest_id", dest_id),
            ("dest_type", dest_type),
            ("checkin_date", query.check_in.clone()),
            ("checkout_date", query.check_out.clone()),
            ("adults_number", "1".to_string()),
            ("room_number", "1".to_string()),
            ("order_by", "popularity".to_string()),
            ("units", "metric".to_string()),
            ("filter_by_currency", "INR".to_string()),
            ("locale", "en-gb".to_string()),
        ];
        let data = self.get_json("/v1/hotels/search", &params).await?;
        let hotels = data
            .get("result")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        Ok(with_unique_ids(
            hotels
                .iter()
                .take(self.max_results)
                .enumerate()
                .map(|(i, raw)| map_hotel(i, raw, query))
                .collect(),
        ))
    }

    async fn search_cars(&self, query: &CarQuery) -> Result<ResultSet, FetchError> {
        let locations = self
            .get_json(
                "/v1/cars/locations",
                &[("name", query.location.clone()), ("locale", "en-gb".to_string())],
            )
            .await?;
        let first = locations.as_array().and_then(|a| a.first());
        let coords = first.and_then(|l| Some((number_at(l, "/latitude")?, number_at(l, "/longitude")?)));
        let Some((lat, lon)) = coords else {
            return Err(FetchError::LocationNotFound(query.location.clone()));
        };

        let params = [
            ("pick_up_latitude", lat.to_string()),
            ("pick_up_longitude", lon.to_string()),
            ("drop_off_latitude", lat.to_string()),
            ("drop_off_longitude", lon.to_string()),
            ("pick_up_datetime", format!("{} 10:00:00", query.pickup_date)),
            ("drop_off_datetime", format!("{} 10:00:00", query.dropoff_date)),
            ("sort_by", "recommended".to_string()),
            ("locale", "en-gb".to_string()),
            ("currency", "USD".to_string()),
        ];
        let data = self.get_json("/v1/cars/search", &params).await?;
        let cars = data
            .get("search_results")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        Ok(with_unique_ids(
            cars
                .iter()
                .take(self.max_results)
                .enumerate()
                .map(|(i, raw)| map_car(i, raw, query))
                .collect(),
        ))
    }
}

impl RemoteSource for RemoteFetcher {
    fn supports(&self, domain: Domain) -> bool {
        matches!(domain, Domain::Flights | Domain::Hotels | Domain::Cars)
    }

    async fn fetch(&self, query: &NormalizedQuery) -> Result<ResultSet, FetchError> {
        match query.query() {
            SearchQuery::Flight(q) => self.search_flights(q).await,
            SearchQuery::Hotel(q) => self.search_hotels(q).await,
            SearchQuery::Car(q) => self.search_cars(q).await,
            other => Err(FetchError::Unsupported(other.domain())),
        }
    }
}

fn map_flight(index: usize, raw: &Value, query: &FlightQuery) -> SearchResult {
    let leg = raw.pointer("/legs/0").unwrap_or(raw);
    let mut rng = rand::thread_rng();

    let id = text_at(raw, "/flight_key")
        .or_else(|| text_at(raw, "/id"))
        .unwrap_or_else(|| format!("flight-{}", index));
    let origin = text_at(leg, "/origin/code").unwrap_or_else(|| query.from.clone());
    let destination = text_at(leg, "/destination/code").unwrap_or_else(|| query.to.clone());

    let mut flight = SearchResult::new(id, Domain::Flights, format!("{} → {}", origin, destination));
    flight.sub_info = text_at(leg, "/operating_carrier/name")
        .or_else(|| text_at(leg, "/airline"))
        .unwrap_or_else(|| "Airline".to_string());
    flight.time_info = match number_at(leg, "/duration_minutes") {
        Some(minutes) => {
            let minutes = minutes.max(0.0) as u64;
            format!("{}h {}m", minutes / 60, minutes % 60)
        }
        None => text_at(leg, "/duration")
            .unwrap_or_else(|| format!("{}h {}m", rng.gen_range(2..12), rng.gen_range(0..60))),
    };
    flight.category = "flight".to_string();
    flight.currency = Currency::Usd;
    flight.price = decimal_at(raw, "/price_details/display_price")
        .or_else(|| decimal_at(raw, "/price"))
        .unwrap_or_else(|| Decimal::from(rng.gen_range(200..1000)));
    flight.rating = number_at(raw, "/rating").unwrap_or_else(|| random_rating(&mut rng));
    flight.image = PLACEHOLDER_IMAGE.to_string();
    flight
}

fn map_hotel(index: usize, raw: &Value, query: &HotelQuery) -> SearchResult {
    let mut rng = rand::thread_rng();

    let id = text_at(raw, "/hotel_id").unwrap_or_else(|| format!("hotel-{}", index));
    let name = text_at(raw, "/hotel_name").unwrap_or_else(|| "Hotel".to_string());
    let city = text_at(raw, "/city").unwrap_or_else(|| query.destination.clone());

    let mut hotel = SearchResult::new(id, Domain::Hotels, name);
    hotel.sub_info = text_at(raw, "/address").unwrap_or_else(|| city.clone());
    hotel.location = city;
    hotel.time_info = format!("{} to {}", query.check_in, query.check_out);
    hotel.category = "hotel".to_string();
    hotel.currency = Currency::Inr;
    hotel.price_unit = Some("night".to_string());
    hotel.price = decimal_at(raw, "/min_total_price")
        .map(|p| p.round())
        .unwrap_or_else(|| Decimal::from(rng.gen_range(2000..6000)));
    // Provider scores out of 10
    hotel.rating = number_at(raw, "/review_score")
        .map(|s| (s / 2.0 * 10.0).round() / 10.0)
        .unwrap_or_else(|| random_rating(&mut rng));
    hotel.review_count = number_at(raw, "/review_nr").map(|n| n.max(0.0) as u32).unwrap_or(0);
    hotel.image = text_at(raw, "/max_photo_url").unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
    hotel
}

fn map_car(index: usize, raw: &Value, query: &CarQuery) -> SearchResult {
    let mut rng = rand::thread_rng();

    let id = text_at(raw, "/vehicle_id").unwrap_or_else(|| format!("car-{}", index));
    let model = text_at(raw, "/vehicle_info/v_name").unwrap_or_else(|| "Rental car".to_string());
    let class = text_at(raw, "/vehicle_info/group").unwrap_or_else(|| "Standard".to_string());
    let supplier = text_at(raw, "/supplier_info/name").unwrap_or_else(|| "Supplier".to_string());

    let mut car = SearchResult::new(id, Domain::Cars, model);
    car.sub_info = format!("{} • {}", class, supplier);
    car.time_info = format!("{} to {}", query.pickup_date, query.dropoff_date);
    car.location = query.location.clone();
    car.category = class.to_lowercase();
    car.currency = Currency::Usd;
    car.price_unit = Some("day".to_string());
    car.price = decimal_at(raw, "/pricing_info/price")
        .map(|p| p.round())
        .unwrap_or_else(|| Decimal::from(rng.gen_range(30..120)));
    car.rating = number_at(raw, "/rating_info/average")
        .map(|s| if s > 5.0 { s / 2.0 } else { s })
        .unwrap_or_else(|| random_rating(&mut rng));
    car.image = text_at(raw, "/vehicle_info/image_url").unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
    car
}

/// Suffix repeated provider ids with their position so ids stay unique
/// within one result set
fn with_unique_ids(mut items: Vec<SearchResult>) -> ResultSet {
    let mut seen = HashSet::with_capacity(items.len());
    for (i, item) in items.iter_mut().enumerate() {
        if !seen.contains(&item.id) {
            seen.insert(item.id.clone());
            continue;
        }
        let mut suffix = i;
        let mut candidate = format!("{}-{}", item.id, suffix);
        while seen.contains(&candidate) {
            suffix += 1;
            candidate = format!("{}-{}", item.id, suffix);
        }
        tracing::debug!("Duplicate provider id {} renamed to {}", item.id, candidate);
        seen.insert(candidate.clone());
        item.id = candidate;
    }
    ResultSet::new(items)
}

fn random_rating(rng: &mut impl Rng) -> f64 {
    (rng.gen_range(4.0..5.0_f64) * 10.0).round() / 10.0
}

/// Non-empty string at `pointer`; numbers are rendered as text
fn text_at(value: &Value, pointer: &str) -> Option<String> {
    match value.pointer(pointer)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Number at `pointer`; numeric strings are accepted
fn number_at(value: &Value, pointer: &str) -> Option<f64> {
    let number = match value.pointer(pointer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

fn decimal_at(value: &Value, pointer: &str) -> Option<Decimal> {
    number_at(value, pointer)
        .and_then(Decimal::from_f64)
        .filter(|d| *d > Decimal::ZERO)
}
