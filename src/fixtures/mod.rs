// fixtures/mod.rs - Mock catalogs
//
// Deterministic base data for every search domain. The mock provider serves
// these when no remote source is configured or the remote call fails, and
// the tests use them as known inputs.

pub mod tables;

use crate::web_app::model::SearchResult;

/// A named slice of a mock catalog, e.g. all hotels in one city
pub struct Partition {
    pub key: &'static str,
    pub rows: Vec<SearchResult>,
}

/// Shorter keys only select a partition by containing its whole key
pub const MIN_FRAGMENT_LEN: usize = 3;

/// A mock catalog split into partitions
pub trait MockTable {
    /// Partitions in a fixed order; keys are lowercase
    fn partitions() -> Vec<Partition>;

    /// Rows of every partition whose key overlaps `key`.
    ///
    /// A key overlaps a partition when it contains the partition key
    /// ("ranchi city" selects `ranchi`), or when it is a fragment of at least
    /// [`MIN_FRAGMENT_LEN`] characters of the partition key ("jamshed"
    /// selects `jamshedpur`). One fragment can still overlap several
    /// partitions and selects them all. A blank key, or one that matches no
    /// partition, yields the union of all partitions so that a mock search
    /// is never empty.
    fn select(key: &str) -> Vec<SearchResult> {
        let needle = key.trim().to_lowercase();
        let partitions = Self::partitions();
        if !needle.is_empty() {
            let fragment = needle.chars().count() >= MIN_FRAGMENT_LEN;
            let matched: Vec<SearchResult> = partitions
                .iter()
                .filter(|p| {
                    needle.contains(p.key) || (fragment && p.key.contains(needle.as_str()))
                })
                .flat_map(|p| p.rows.iter().cloned())
                .collect();
            if !matched.is_empty() {
                return matched;
            }
        }
        partitions.into_iter().flat_map(|p| p.rows).collect()
    }
}
