// lib.rs - Root module for the travel_search library
//
// The search/filter/sort/fallback pipeline behind the hotel, transport and
// marketplace pages, plus the thin collaborators those pages consume.

/// Mock catalogs used as the always-available fallback data source
pub mod fixtures;

/// Models, pipeline components and page controllers
pub mod web_app;
