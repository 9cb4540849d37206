// fixtures/tables/hotels.rs
//
// Hotels across Jharkhand, partitioned by city. Prices are per night in INR.

use rust_decimal::Decimal;

use crate::fixtures::{MockTable, Partition};
use crate::web_app::model::{Currency, Domain, SearchResult};

pub struct HotelsTable;

#[allow(clippy::too_many_arguments)]
fn hotel(
    id: u32,
    name: &str,
    location: &str,
    price: i64,
    rating: f64,
    reviews: u32,
    amenities: &[&str],
    image: &str,
) -> SearchResult {
    let mut row = SearchResult::new(format!("hotel-{}", id), Domain::Hotels, name);
    row.sub_info = location.to_string();
    row.time_info = "Check-in from 12:00".to_string();
    row.location = location.to_string();
    row.category = "hotel".to_string();
    row.price = Decimal::from(price);
    row.currency = Currency::Inr;
    row.price_unit = Some("night".to_string());
    row.rating = rating;
    row.review_count = reviews;
    row.tags = amenities.iter().map(|a| a.to_string()).collect();
    row.image = format!("https://images.unsplash.com/{}?auto=format&fit=crop&w=2070&q=80", image);
    row
}

impl MockTable for HotelsTable {
    fn partitions() -> Vec<Partition> {
        vec![
            Partition {
                key: "ranchi",
                rows: vec![
                    hotel(1, "Radisson Blu Hotel Ranchi", "Ranchi", 5500, 4.7, 812,
                        &["Pool", "WiFi", "Spa", "Gym"], "photo-1566073771259-6a8506099945"),
                    hotel(5, "Le Lac Sarovar Portico", "Ranchi", 4800, 4.6, 534,
                        &["Lake View", "Rooftop Bar", "Gym"], "photo-1596394516093-501ba68a0ba6"),
                    hotel(8, "Hotel Yuvraj Palace", "Ranchi", 2500, 4.2, 298,
                        &["WiFi", "Restaurant", "Parking"], "photo-1611892440504-42a792e24d32"),
                    hotel(9, "Capitol Residency", "Ranchi", 3200, 3.8, 141,
                        &["WiFi", "Free Breakfast"], "photo-1590490360182-c33d57733427"),
                ],
            },
            Partition {
                key: "jamshedpur",
                rows: vec![
                    hotel(2, "The Alcor Hotel", "Jamshedpur", 4200, 4.5, 467,
                        &["Gym", "WiFi", "Restaurant"], "photo-1542314831-068cd1dbb5eb"),
                    hotel(7, "Ramada by Wyndham", "Jamshedpur", 4000, 4.4, 389,
                        &["Pool", "WiFi", "Business Center"], "photo-1571896349842-33c89424de2d"),
                ],
            },
            Partition {
                key: "dhanbad",
                rows: vec![hotel(3, "Sonotel Hotel Dhanbad", "Dhanbad", 3800, 4.3, 256,
                    &["Free Breakfast", "WiFi", "Conference Hall"], "photo-1582719508461-905c673771fd")],
            },
            Partition {
                key: "deoghar",
                rows: vec![hotel(4, "Imperial Heights", "Deoghar", 3000, 4.1, 203,
                    &["Temple Proximity", "WiFi", "Vegetarian Restaurant"], "photo-1618773928121-c32242e63f39")],
            },
            Partition {
                key: "netarhat",
                rows: vec![hotel(6, "Prabhat Vihar Hotel", "Netarhat", 2500, 4.0, 118,
                    &["Sunrise Point", "Basic Amenities", "Restaurant"], "photo-1520250497591-112f2f40a3f4")],
            },
        ]
    }
}
