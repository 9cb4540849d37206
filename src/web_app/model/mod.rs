// web_app/model/mod.rs - Shared data models for the search pipeline
//
// These structs travel between the pipeline components and the
// presentation layer, which consumes render-ready result lists.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Search category a query or result belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Flights,
    Hotels,
    Cars,
    Trains,
    Marketplace,
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Domain::Flights => write!(f, "flights"),
            Domain::Hotels => write!(f, "hotels"),
            Domain::Cars => write!(f, "cars"),
            Domain::Trains => write!(f, "trains"),
            Domain::Marketplace => write!(f, "marketplace"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightQuery {
    pub from: String,
    pub to: String,
    /// Departure date, `YYYY-MM-DD`
    pub date: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelQuery {
    pub destination: String,
    pub check_in: String,
    pub check_out: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarQuery {
    pub location: String,
    pub pickup_date: String,
    pub dropoff_date: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainQuery {
    pub from: String,
    pub to: String,
    pub date: String,
}

/// Budget bucket used by marketplace products and facets
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetRange {
    #[default]
    All,
    Budget,
    Mid,
    Premium,
}

impl BudgetRange {
    /// Parse a form value; anything unrecognised means "no budget filter"
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "budget" => BudgetRange::Budget,
            "mid" => BudgetRange::Mid,
            "premium" => BudgetRange::Premium,
            _ => BudgetRange::All,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            BudgetRange::All => "all",
            BudgetRange::Budget => "budget",
            BudgetRange::Mid => "mid",
            BudgetRange::Premium => "premium",
        }
    }
}

impl std::fmt::Display for BudgetRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BudgetRange::All => write!(f, "flexible"),
            other => write!(f, "{}", other.key()),
        }
    }
}

/// The composite of marketplace facets that keys recommendation caching
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FacetKey {
    pub destination: String,
    pub duration: String,
    pub budget: BudgetRange,
    pub search_term: String,
}

impl FacetKey {
    /// True when no facet is selected; an empty key never triggers a fetch
    pub fn is_empty(&self) -> bool {
        self.destination.trim().is_empty()
            && self.duration.trim().is_empty()
            && self.budget == BudgetRange::All
            && self.search_term.trim().is_empty()
    }

    pub fn cache_key(&self) -> String {
        format!(
            "{}-{}-{}-{}",
            self.destination.trim(),
            self.duration.trim(),
            self.budget.key(),
            self.search_term.trim()
        )
    }
}

/// A user-supplied query, one variant per search domain
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SearchQuery {
    Flight(FlightQuery),
    Hotel(HotelQuery),
    Car(CarQuery),
    Train(TrainQuery),
    Marketplace(FacetKey),
}

impl SearchQuery {
    pub fn domain(&self) -> Domain {
        match self {
            SearchQuery::Flight(_) => Domain::Flights,
            SearchQuery::Hotel(_) => Domain::Hotels,
            SearchQuery::Car(_) => Domain::Cars,
            SearchQuery::Train(_) => Domain::Trains,
            SearchQuery::Marketplace(_) => Domain::Marketplace,
        }
    }
}

/// A query whose location-like fields have been replaced by canonical codes.
///
/// Only the normalizer constructs one, so the remote fetcher never sees raw
/// free-text airports.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NormalizedQuery {
    query: SearchQuery,
}

impl NormalizedQuery {
    pub(crate) fn new(query: SearchQuery) -> Self {
        Self { query }
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn domain(&self) -> Domain {
        self.query.domain()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    Usd,
    Inr,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Inr => "₹",
        }
    }
}

/// One bookable or viewable item, uniform across domains
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub domain: Domain,
    pub main_info: String,
    pub sub_info: String,
    pub time_info: String,
    pub price: Decimal,
    pub currency: Currency,
    /// Billing unit shown after the price, e.g. "day" for car rentals
    pub price_unit: Option<String>,
    /// List price before discount, when the item is discounted
    pub original_price: Option<Decimal>,
    pub rating: f64,
    pub review_count: u32,
    pub category: String,
    pub location: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,
    /// Destinations this item is suggested for; "all" matches everywhere
    pub destinations: Vec<String>,
    pub budget_range: Option<BudgetRange>,
}

impl SearchResult {
    pub fn new(id: impl Into<String>, domain: Domain, main_info: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            domain,
            main_info: main_info.into(),
            sub_info: String::new(),
            time_info: String::new(),
            price: Decimal::ZERO,
            currency: Currency::default(),
            price_unit: None,
            original_price: None,
            rating: 0.0,
            review_count: 0,
            category: String::new(),
            location: String::new(),
            description: String::new(),
            image: String::new(),
            tags: Vec::new(),
            destinations: Vec::new(),
            budget_range: None,
        }
    }

    /// Display price, e.g. "$649", "₹2,580" or "$45/day"
    pub fn price_label(&self) -> String {
        let amount = group_thousands(self.price);
        match &self.price_unit {
            Some(unit) => format!("{}{}/{}", self.currency.symbol(), amount, unit),
            None => format!("{}{}", self.currency.symbol(), amount),
        }
    }

    /// Discount amount; zero when the item is not discounted
    pub fn discount(&self) -> Decimal {
        match self.original_price {
            Some(original) if original > self.price => original - self.price,
            _ => Decimal::ZERO,
        }
    }

    /// Case-insensitive destination match against the location or the
    /// suggested-destination list
    pub fn serves_destination(&self, destination: &str) -> bool {
        let needle = destination.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        if self.location.to_lowercase().contains(&needle) {
            return true;
        }
        self.destinations
            .iter()
            .map(|d| d.to_lowercase())
            .any(|d| d == "all" || d == needle)
    }

    /// Free-text match over name, description and tags
    pub fn matches_term(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.main_info.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&needle))
    }
}

fn group_thousands(amount: Decimal) -> String {
    let whole = amount.round().to_string();
    let (sign, digits) = match whole.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", whole.as_str()),
    };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}{}", sign, grouped)
}

/// The unfiltered list returned by one search invocation
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    pub items: Vec<SearchResult>,
}

impl ResultSet {
    pub fn new(items: Vec<SearchResult>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SearchResult> {
        self.items.iter()
    }

    /// True when every id occurs once
    pub fn has_unique_ids(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.items.len());
        self.items.iter().all(|r| seen.insert(r.id.as_str()))
    }
}

impl From<Vec<SearchResult>> for ResultSet {
    fn from(items: Vec<SearchResult>) -> Self {
        Self::new(items)
    }
}

/// Current filter and sort selections for a page
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub price_max: Option<Decimal>,
    pub min_rating: Option<f64>,
    /// Category id; `None` or the sentinel "all" disables the filter
    pub category: Option<String>,
    pub destination: Option<String>,
    pub search_term: Option<String>,
    pub budget: BudgetRange,
    pub sort_by: SortOption,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOption {
    /// Keep the order the results arrived in
    #[default]
    Relevance,
    PriceAsc,
    PriceDesc,
    RatingDesc,
    Popularity,
    Discount,
}

impl SortOption {
    pub const ALL: [SortOption; 6] = [
        SortOption::Relevance,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::RatingDesc,
        SortOption::Popularity,
        SortOption::Discount,
    ];

    /// Parse a form value; unknown keys fall back to the no-op ordering
    pub fn from_key(key: &str) -> Self {
        match key.trim() {
            "price_asc" => SortOption::PriceAsc,
            "price_desc" => SortOption::PriceDesc,
            "rating_desc" => SortOption::RatingDesc,
            "popularity" => SortOption::Popularity,
            "discount" => SortOption::Discount,
            _ => SortOption::Relevance,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            SortOption::Relevance => "relevance",
            SortOption::PriceAsc => "price_asc",
            SortOption::PriceDesc => "price_desc",
            SortOption::RatingDesc => "rating_desc",
            SortOption::Popularity => "popularity",
            SortOption::Discount => "discount",
        }
    }
}

impl std::fmt::Display for SortOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOption::Relevance => write!(f, "Relevance"),
            SortOption::PriceAsc => write!(f, "Price: Low to High"),
            SortOption::PriceDesc => write!(f, "Price: High to Low"),
            SortOption::RatingDesc => write!(f, "Rating: High to Low"),
            SortOption::Popularity => write!(f, "Most Popular"),
            SortOption::Discount => write!(f, "Biggest Discount"),
        }
    }
}

/// Facet count for filters
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCount {
    pub value: String,
    pub count: i64,
}

/// Which path produced a result set
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Remote,
    Mock,
}

/// Tagged output of one search invocation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub domain: Domain,
    pub source: Source,
    pub results: ResultSet,
    /// Advisory banner text when the remote path failed
    pub advisory: Option<String>,
}

/// Opaque view of the identity provider's session
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthState {
    #[default]
    SignedOut,
    SignedIn {
        uid: String,
        display_name: Option<String>,
    },
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::SignedIn { .. })
    }

    pub fn display_name(&self) -> &str {
        match self {
            AuthState::SignedIn {
                display_name: Some(name),
                ..
            } if !name.trim().is_empty() => name,
            _ => "Anonymous",
        }
    }
}

/// One record in the realtime feedback store
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub id: String,
    pub name: String,
    pub place: String,
    pub message: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: SearchResult,
    pub quantity: u32,
}

/// Marketplace cart and favourites, held in memory for the session
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub items: Vec<CartItem>,
    pub favorites: Vec<String>,
}

impl Cart {
    /// Adds one unit, merging with an existing line for the same product
    pub fn add(&mut self, product: &SearchResult) {
        match self.items.iter_mut().find(|i| i.product.id == product.id) {
            Some(item) => item.quantity = item.quantity.saturating_add(1),
            None => self.items.push(CartItem {
                product: product.clone(),
                quantity: 1,
            }),
        }
    }

    /// Sets the quantity of a line; zero removes it
    pub fn set_quantity(&mut self, product_id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product_id) {
            item.quantity = quantity;
        }
    }

    pub fn remove(&mut self, product_id: &str) {
        self.items.retain(|i| i.product.id != product_id);
    }

    /// Returns whether the product is a favourite after toggling
    pub fn toggle_favorite(&mut self, product_id: &str) -> bool {
        if let Some(pos) = self.favorites.iter().position(|id| id == product_id) {
            self.favorites.remove(pos);
            false
        } else {
            self.favorites.push(product_id.to_string());
            true
        }
    }

    pub fn is_favorite(&self, product_id: &str) -> bool {
        self.favorites.iter().any(|id| id == product_id)
    }

    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |total, i| total.saturating_add(i.quantity))
    }

    pub fn total(&self) -> Decimal {
        self.items
            .iter()
            .map(|i| i.product.price * Decimal::from(i.quantity))
            .sum()
    }
}
