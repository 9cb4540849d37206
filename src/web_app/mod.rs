// web_app/mod.rs - Root module for the travel pages' search logic
//
// Architecture:
// - model/: Shared data types (queries, results, filters, outcomes)
// - errors.rs: Validation and fetch error taxonomy
// - api/: Pipeline components (normalizer, validator, remote fetcher,
//   mock provider, filter-sort engine, recommendations, collaborators)
// - server_fns.rs: The validate -> normalize -> remote -> mock bridge
// - pages/: Page-level controllers owning filter and result state

pub mod model;

pub mod errors;

pub mod api;

pub mod server_fns;

pub mod pages;

pub use errors::{ErrorCategory, FetchError, ValidationError};
pub use server_fns::SearchService;
