// fixtures/tables/mod.rs
//
// One mock catalog per search domain; each implements MockTable.

pub mod hotels;
pub mod products;
pub mod transport;

pub use hotels::HotelsTable;
pub use products::ProductsTable;
pub use transport::{CarsTable, FlightsTable, TrainsTable};
