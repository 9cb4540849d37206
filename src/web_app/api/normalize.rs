// web_app/api/normalize.rs - Free-text location to canonical code
//
// Airport inputs are resolved to IATA codes through a static dictionary.
// Unresolved input is passed through uppercased; the validator reports it.

use crate::web_app::model::{NormalizedQuery, SearchQuery};

/// Common place names and their airport codes, in lookup order
pub const AIRPORT_CODES: &[(&str, &str)] = &[
    // US major cities
    ("NEW YORK", "JFK"),
    ("NYC", "JFK"),
    ("MANHATTAN", "LGA"),
    ("LOS ANGELES", "LAX"),
    ("LA", "LAX"),
    ("HOLLYWOOD", "LAX"),
    ("CHICAGO", "ORD"),
    ("MIAMI", "MIA"),
    ("BOSTON", "BOS"),
    ("SAN FRANCISCO", "SFO"),
    ("SF", "SFO"),
    ("SEATTLE", "SEA"),
    ("LAS VEGAS", "LAS"),
    ("VEGAS", "LAS"),
    ("ATLANTA", "ATL"),
    ("DENVER", "DEN"),
    ("PHOENIX", "PHX"),
    ("DETROIT", "DTW"),
    ("WASHINGTON", "DCA"),
    ("DC", "DCA"),
    // International
    ("LONDON", "LHR"),
    ("PARIS", "CDG"),
    ("TOKYO", "NRT"),
    ("DUBAI", "DXB"),
    ("SINGAPORE", "SIN"),
    ("HONG KONG", "HKG"),
    ("AMSTERDAM", "AMS"),
    ("FRANKFURT", "FRA"),
    ("ROME", "FCO"),
    ("MADRID", "MAD"),
    ("BARCELONA", "BCN"),
    ("BERLIN", "BER"),
    ("ZURICH", "ZUR"),
    ("VIENNA", "VIE"),
    ("ISTANBUL", "IST"),
    // Indian cities
    ("MUMBAI", "BOM"),
    ("DELHI", "DEL"),
    ("NEW DELHI", "DEL"),
    ("BANGALORE", "BLR"),
    ("BENGALURU", "BLR"),
    ("CHENNAI", "MAA"),
    ("KOLKATA", "CCU"),
    ("CALCUTTA", "CCU"),
    ("HYDERABAD", "HYD"),
    ("PUNE", "PNQ"),
    ("AHMEDABAD", "AMD"),
    ("GOA", "GOI"),
    ("KOCHI", "COK"),
    ("COCHIN", "COK"),
    ("THIRUVANANTHAPURAM", "TRV"),
    ("RANCHI", "IXR"),
];

/// Codes accepted by the flight search
pub const KNOWN_CODES: &[&str] = &[
    "JFK", "LAX", "ORD", "DFW", "DEN", "LAS", "PHX", "MIA", "SEA", "BOS", "SFO", "LGA", "EWR",
    "ATL", "IAH", "MSP", "DTW", "PHL", "DCA", "LHR", "CDG", "AMS", "FRA", "MAD", "BCN", "FCO",
    "ZUR", "VIE", "ARN", "CPH", "OSL", "HEL", "BER", "IST", "NRT", "ICN", "PVG", "HKG", "SIN",
    "BKK", "KUL", "DXB", "DOH", "BOM", "DEL", "BLR", "MAA", "CCU", "HYD", "PNQ", "AMD", "GOI",
    "COK", "TRV", "IXR",
];

pub fn is_known_code(code: &str) -> bool {
    KNOWN_CODES.contains(&code)
}

fn has_code_shape(input: &str) -> bool {
    input.len() == 3 && input.bytes().all(|b| b.is_ascii_uppercase())
}

/// Resolve free text to an airport code.
///
/// Order: known code as-is, exact name, then the longest dictionary name that
/// contains or is contained in the input (ties go to the earlier entry).
/// Anything else comes back trimmed and uppercased.
pub fn normalize_airport(input: &str) -> String {
    let upper = input.trim().to_uppercase();
    if upper.is_empty() {
        return upper;
    }

    if has_code_shape(&upper) && is_known_code(&upper) {
        return upper;
    }

    if let Some((_, code)) = AIRPORT_CODES.iter().find(|(name, _)| *name == upper) {
        return (*code).to_string();
    }

    let mut best: Option<(&str, &str)> = None;
    for (name, code) in AIRPORT_CODES {
        if name.contains(upper.as_str()) || upper.contains(name) {
            match best {
                Some((current, _)) if current.len() >= name.len() => {}
                _ => best = Some((name, code)),
            }
        }
    }

    match best {
        Some((name, code)) => {
            tracing::debug!("Resolved '{}' to {} via partial match on '{}'", input, code, name);
            code.to_string()
        }
        None => upper,
    }
}

/// Replace location-like fields with canonical forms.
///
/// Only airports have canonical codes; hotel, car and train locations accept
/// free text and are just trimmed.
pub fn normalize_query(query: &SearchQuery) -> NormalizedQuery {
    let normalized = match query {
        SearchQuery::Flight(q) => {
            let mut q = q.clone();
            q.from = normalize_airport(&q.from);
            q.to = normalize_airport(&q.to);
            q.date = q.date.trim().to_string();
            SearchQuery::Flight(q)
        }
        SearchQuery::Hotel(q) => {
            let mut q = q.clone();
            q.destination = q.destination.trim().to_string();
            SearchQuery::Hotel(q)
        }
        SearchQuery::Car(q) => {
            let mut q = q.clone();
            q.location = q.location.trim().to_string();
            SearchQuery::Car(q)
        }
        SearchQuery::Train(q) => {
            let mut q = q.clone();
            q.from = q.from.trim().to_string();
            q.to = q.to.trim().to_string();
            SearchQuery::Train(q)
        }
        SearchQuery::Marketplace(key) => SearchQuery::Marketplace(key.clone()),
    };
    NormalizedQuery::new(normalized)
}
