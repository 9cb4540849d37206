// tests/validation_tests.rs - Query validation across domains

mod common;

use common::{date_in, flight, today};
use travel_search::web_app::api::validate::{check, validate};
use travel_search::web_app::model::{CarQuery, FlightQuery, SearchQuery, TrainQuery};

#[test]
fn test_flight_self_loop_after_normalization() {
    let query = flight("NYC", "NYC", &date_in(1));
    let err = check(&query, today()).unwrap_err();

    assert_eq!(
        err.violations,
        vec!["Departure and destination airports cannot be the same".to_string()]
    );
    assert_eq!(
        err.to_string(),
        "Departure and destination airports cannot be the same."
    );
}

#[test]
fn test_self_loop_detected_across_names_and_codes() {
    let query = flight("new york", "JFK", &date_in(3));
    let violations = validate(&query, today());
    assert!(violations.contains(&"Departure and destination airports cannot be the same".to_string()));
}

#[test]
fn test_every_missing_field_is_reported() {
    let query = SearchQuery::Flight(FlightQuery::default());
    let violations = validate(&query, today());
    assert_eq!(
        violations,
        vec![
            "Departure airport is required".to_string(),
            "Destination airport is required".to_string(),
            "Departure date is required".to_string(),
        ]
    );

    let query = SearchQuery::Car(CarQuery {
        location: "Ranchi".to_string(),
        ..CarQuery::default()
    });
    assert!(validate(&query, today()).len() >= 2);
}

#[test]
fn test_unknown_airport_is_named_in_message() {
    let violations = validate(&flight("Gotham", "LHR", &date_in(5)), today());
    assert_eq!(violations.len(), 1);
    assert!(violations[0].contains("\"Gotham\""));
    assert!(violations[0].contains("Try codes like JFK, LAX, LHR"));
}

#[test]
fn test_past_dates_are_rejected_at_day_granularity() {
    assert!(validate(&flight("JFK", "LHR", &date_in(0)), today()).is_empty());
    assert_eq!(
        validate(&flight("JFK", "LHR", &date_in(-1)), today()),
        vec!["Departure date cannot be in the past".to_string()]
    );

    let train = SearchQuery::Train(TrainQuery {
        from: "Ranchi".to_string(),
        to: "Howrah".to_string(),
        date: date_in(-2),
    });
    assert_eq!(
        validate(&train, today()),
        vec!["Journey date cannot be in the past".to_string()]
    );
}

#[test]
fn test_flight_horizon() {
    assert!(validate(&flight("JFK", "LHR", &date_in(330)), today()).is_empty());
    assert_eq!(validate(&flight("JFK", "LHR", &date_in(331)), today()).len(), 1);
}

#[test]
fn test_range_ordering() {
    let car = SearchQuery::Car(CarQuery {
        location: "Ranchi".to_string(),
        pickup_date: date_in(4),
        dropoff_date: date_in(2),
    });
    assert_eq!(
        validate(&car, today()),
        vec!["Drop-off date must be after pickup date".to_string()]
    );

    let hotel = common::hotel("Ranchi", 1);
    assert!(check(&hotel, today()).is_ok());
}

#[test]
fn test_malformed_date_is_a_violation() {
    let violations = validate(&flight("JFK", "LHR", "next tuesday"), today());
    assert_eq!(violations, vec!["Departure date is invalid".to_string()]);
}
