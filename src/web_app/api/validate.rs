// web_app/api/validate.rs - Per-domain query validation
//
// Pure functions of (query, today). Every rule is evaluated; the caller gets
// all violations at once, in a stable order.

use chrono::{Duration, NaiveDate};

use crate::web_app::api::normalize::{is_known_code, normalize_airport};
use crate::web_app::errors::ValidationError;
use crate::web_app::model::{CarQuery, FacetKey, FlightQuery, HotelQuery, SearchQuery, TrainQuery};

/// Furthest departure date most flight providers accept
pub const MAX_FLIGHT_DAYS_AHEAD: i64 = 330;

/// Collect every violation for `query`, judged against `today`
pub fn validate(query: &SearchQuery, today: NaiveDate) -> Vec<String> {
    let mut errors = Vec::new();
    match query {
        SearchQuery::Flight(q) => validate_flight(q, today, &mut errors),
        SearchQuery::Hotel(q) => validate_hotel(q, today, &mut errors),
        SearchQuery::Car(q) => validate_car(q, today, &mut errors),
        SearchQuery::Train(q) => validate_train(q, today, &mut errors),
        SearchQuery::Marketplace(key) => validate_facets(key, &mut errors),
    }
    errors
}

/// `Ok` exactly when the query is submittable
pub fn check(query: &SearchQuery, today: NaiveDate) -> Result<(), ValidationError> {
    let violations = validate(query, today);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(violations))
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Outcome of reading a date field
enum DateField {
    Missing,
    Invalid,
    Date(NaiveDate),
}

fn parse_date(value: &str) -> DateField {
    let value = value.trim();
    if value.is_empty() {
        return DateField::Missing;
    }
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => DateField::Date(date),
        Err(_) => DateField::Invalid,
    }
}

fn validate_flight(q: &FlightQuery, today: NaiveDate, errors: &mut Vec<String>) {
    if is_blank(&q.from) {
        errors.push("Departure airport is required".to_string());
    } else if !is_known_code(&normalize_airport(&q.from)) {
        errors.push(format!(
            "Invalid departure airport code: \"{}\". Try codes like JFK, LAX, LHR",
            q.from.trim()
        ));
    }

    if is_blank(&q.to) {
        errors.push("Destination airport is required".to_string());
    } else if !is_known_code(&normalize_airport(&q.to)) {
        errors.push(format!(
            "Invalid destination airport code: \"{}\". Try codes like JFK, LAX, LHR",
            q.to.trim()
        ));
    }

    match parse_date(&q.date) {
        DateField::Missing => errors.push("Departure date is required".to_string()),
        DateField::Invalid => errors.push("Departure date is invalid".to_string()),
        DateField::Date(date) => {
            if date < today {
                errors.push("Departure date cannot be in the past".to_string());
            }
            if date > today + Duration::days(MAX_FLIGHT_DAYS_AHEAD) {
                errors.push("Departure date is too far in the future".to_string());
            }
        }
    }

    if !is_blank(&q.from) && !is_blank(&q.to) && normalize_airport(&q.from) == normalize_airport(&q.to)
    {
        errors.push("Departure and destination airports cannot be the same".to_string());
    }
}

/// Shared check-in/check-out style range rules
fn validate_range(
    start: &str,
    end: &str,
    labels: (&str, &str),
    today: NaiveDate,
    errors: &mut Vec<String>,
) {
    let (start_label, end_label) = labels;
    let start_date = match parse_date(start) {
        DateField::Missing => {
            errors.push(format!("{} date is required", start_label));
            None
        }
        DateField::Invalid => {
            errors.push(format!("{} date is invalid", start_label));
            None
        }
        DateField::Date(date) => Some(date),
    };
    let end_date = match parse_date(end) {
        DateField::Missing => {
            errors.push(format!("{} date is required", end_label));
            None
        }
        DateField::Invalid => {
            errors.push(format!("{} date is invalid", end_label));
            None
        }
        DateField::Date(date) => Some(date),
    };

    if let Some(start_date) = start_date {
        if start_date < today {
            errors.push(format!("{} date cannot be in the past", start_label));
        }
        if let Some(end_date) = end_date {
            if end_date <= start_date {
                errors.push(format!(
                    "{} date must be after {} date",
                    end_label,
                    start_label.to_lowercase()
                ));
            }
        }
    }
}

fn validate_hotel(q: &HotelQuery, today: NaiveDate, errors: &mut Vec<String>) {
    if is_blank(&q.destination) {
        errors.push("Destination is required".to_string());
    }
    validate_range(&q.check_in, &q.check_out, ("Check-in", "Check-out"), today, errors);
}

fn validate_car(q: &CarQuery, today: NaiveDate, errors: &mut Vec<String>) {
    if is_blank(&q.location) {
        errors.push("Pickup location is required".to_string());
    }
    validate_range(&q.pickup_date, &q.dropoff_date, ("Pickup", "Drop-off"), today, errors);
}

fn validate_train(q: &TrainQuery, today: NaiveDate, errors: &mut Vec<String>) {
    if is_blank(&q.from) {
        errors.push("Departure station is required".to_string());
    }
    if is_blank(&q.to) {
        errors.push("Destination station is required".to_string());
    }
    match parse_date(&q.date) {
        DateField::Missing => errors.push("Journey date is required".to_string()),
        DateField::Invalid => errors.push("Journey date is invalid".to_string()),
        DateField::Date(date) if date < today => {
            errors.push("Journey date cannot be in the past".to_string())
        }
        DateField::Date(_) => {}
    }
}

fn validate_facets(key: &FacetKey, errors: &mut Vec<String>) {
    let duration = key.duration.trim();
    if !duration.is_empty() && !matches!(duration.parse::<u32>(), Ok(days) if days > 0) {
        errors.push("Duration must be a positive number of days".to_string());
    }
}
