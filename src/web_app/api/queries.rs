// web_app/api/queries.rs - Filter and sort over a result set
//
// Every call re-derives the visible list from the full result set and the
// current filter state. Nothing is patched incrementally and the input is
// never modified; result sets are tens of items.

use std::cmp::Ordering;

use crate::web_app::model::{BudgetRange, FilterState, ResultSet, SearchResult, SortOption};

/// `sort(filter(results, filters), filters.sort_by)`
pub fn apply(results: &ResultSet, filters: &FilterState) -> Vec<SearchResult> {
    let mut visible: Vec<SearchResult> = results
        .iter()
        .filter(|r| matches(r, filters))
        .cloned()
        .collect();
    sort_results(&mut visible, filters.sort_by);

    tracing::debug!(
        "Filtered {} results down to {} (sort: {})",
        results.len(),
        visible.len(),
        filters.sort_by.key()
    );
    visible
}

/// Logical AND of every active filter
pub fn matches(result: &SearchResult, filters: &FilterState) -> bool {
    if let Some(max) = filters.price_max {
        if result.price > max {
            return false;
        }
    }

    if let Some(min) = filters.min_rating {
        if result.rating < min {
            return false;
        }
    }

    if let Some(category) = active(&filters.category) {
        if !category.eq_ignore_ascii_case("all") && !result.category.eq_ignore_ascii_case(category) {
            return false;
        }
    }

    if let Some(destination) = active(&filters.destination) {
        if !result.serves_destination(destination) {
            return false;
        }
    }

    if let Some(term) = active(&filters.search_term) {
        if !result.matches_term(term) {
            return false;
        }
    }

    if filters.budget != BudgetRange::All && result.budget_range != Some(filters.budget) {
        return false;
    }

    true
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Stable sort by the selected key; `Relevance` keeps input order
pub fn sort_results(results: &mut [SearchResult], sort: SortOption) {
    let compare: fn(&SearchResult, &SearchResult) -> Ordering = match sort {
        SortOption::Relevance => return,
        SortOption::PriceAsc => |a, b| a.price.cmp(&b.price),
        SortOption::PriceDesc => |a, b| b.price.cmp(&a.price),
        SortOption::RatingDesc => |a, b| b.rating.total_cmp(&a.rating),
        SortOption::Popularity => |a, b| b.review_count.cmp(&a.review_count),
        SortOption::Discount => |a, b| b.discount().cmp(&a.discount()),
    };
    results.sort_by(compare);
}
