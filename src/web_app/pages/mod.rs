// web_app/pages/mod.rs - Page-level controllers
//
// Each page owns its filter state, its current result set and the derived
// visible list; nothing is shared between pages.
// - SearchPage: flights, hotels, cars and trains
// - MarketplacePage: products with facets, recommendations and a cart

pub mod search;

pub mod marketplace;

pub use marketplace::MarketplacePage;
pub use search::{RequestTicket, SearchPage};
