// fixtures/tables/transport.rs
//
// Flights, car rentals and trains. Flight rows carry no route; the mock
// provider stamps the searched route onto them.

use rust_decimal::Decimal;

use crate::fixtures::{MockTable, Partition};
use crate::web_app::model::{Currency, Domain, SearchResult};

pub struct FlightsTable;
pub struct CarsTable;
pub struct TrainsTable;

fn flight(id: u32, airline: &str, duration: &str, price: i64, rating: f64, reviews: u32) -> SearchResult {
    let mut row = SearchResult::new(format!("flight-{}", id), Domain::Flights, "");
    row.sub_info = airline.to_string();
    row.time_info = duration.to_string();
    row.category = "flight".to_string();
    row.price = Decimal::from(price);
    row.currency = Currency::Usd;
    row.rating = rating;
    row.review_count = reviews;
    row
}

fn car(id: u32, model: &str, class: &str, supplier: &str, per_day: i64, rating: f64, reviews: u32) -> SearchResult {
    let mut row = SearchResult::new(format!("car-{}", id), Domain::Cars, model);
    row.sub_info = format!("{} • {}", class, supplier);
    row.time_info = "Flexible pickup".to_string();
    row.category = class.to_lowercase();
    row.price = Decimal::from(per_day);
    row.currency = Currency::Usd;
    row.price_unit = Some("day".to_string());
    row.rating = rating;
    row.review_count = reviews;
    row
}

fn train(id: u32, name: &str, schedule: &str, status: &str, fare: i64, rating: f64) -> SearchResult {
    let mut row = SearchResult::new(format!("train-{}", id), Domain::Trains, name);
    row.sub_info = schedule.to_string();
    row.time_info = status.to_string();
    row.category = "train".to_string();
    row.price = Decimal::from(fare);
    row.currency = Currency::Inr;
    row.rating = rating;
    row
}

impl MockTable for FlightsTable {
    fn partitions() -> Vec<Partition> {
        vec![Partition {
            key: "flights",
            rows: vec![
                flight(1, "Emirates", "8h 30m", 649, 4.5, 1840),
                flight(2, "American Airlines", "6h 45m", 589, 4.2, 2210),
                flight(3, "Delta Airlines", "7h 15m", 723, 4.3, 1975),
                flight(4, "United Airlines", "9h 20m", 456, 4.0, 1533),
            ],
        }]
    }
}

impl MockTable for CarsTable {
    fn partitions() -> Vec<Partition> {
        vec![Partition {
            key: "cars",
            rows: vec![
                car(1, "Toyota Camry", "Standard", "Hertz", 45, 4.3, 412),
                car(2, "BMW 3 Series", "Luxury", "Avis", 89, 4.6, 198),
                car(3, "Honda CR-V", "SUV", "Enterprise", 67, 4.4, 305),
            ],
        }]
    }
}

impl MockTable for TrainsTable {
    fn partitions() -> Vec<Partition> {
        vec![Partition {
            key: "trains",
            rows: vec![
                train(1, "12952 - Mumbai Rajdhani", "16:55 - 08:35 • 15h 40m", "RAC 12", 2580, 4.2),
                train(2, "12138 - Punjab Mail", "20:10 - 21:30 • 25h 20m", "Confirmed", 1200, 3.8),
                train(3, "12454 - Ranchi Rajdhani", "12:25 - 10:55 • 22h 30m", "Available 48", 2945, 4.4),
            ],
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_ids_are_unique() {
        for rows in [FlightsTable::select(""), CarsTable::select(""), TrainsTable::select("")] {
            let mut ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
            let before = ids.len();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), before);
        }
    }

    #[test]
    fn test_car_prices_are_per_day() {
        assert!(CarsTable::select("")
            .iter()
            .all(|c| c.price_label().ends_with("/day")));
    }
}
