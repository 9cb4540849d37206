// web_app/api/mod.rs - Pipeline components
//
// Leaves first: normalizer and validator are pure; the remote fetcher and
// mock provider produce result sets; queries.rs filters and sorts them;
// recommend.rs drives the debounced marketplace recommendations.

pub mod config;

pub mod normalize;

pub mod validate;

pub mod remote;

pub mod mock;

pub mod queries;

pub mod genai;

pub mod recommend;

pub mod itinerary;

pub mod feedback;
