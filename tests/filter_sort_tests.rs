// tests/filter_sort_tests.rs - Filter-sort engine over the mock catalogs

mod common;

use rust_decimal::Decimal;
use travel_search::fixtures::tables::{CarsTable, HotelsTable, ProductsTable};
use travel_search::fixtures::MockTable;
use travel_search::web_app::api::queries::{apply, sort_results};
use travel_search::web_app::model::{BudgetRange, FilterState, ResultSet, SortOption};

fn hotels() -> ResultSet {
    HotelsTable::select("").into()
}

fn ids(results: &[travel_search::web_app::model::SearchResult]) -> Vec<String> {
    results.iter().map(|r| r.id.clone()).collect()
}

#[test]
fn test_ranchi_price_and_rating_ceiling() {
    let ranchi: ResultSet = HotelsTable::select("Ranchi").into();
    let filters = FilterState {
        price_max: Some(Decimal::from(4000)),
        min_rating: Some(4.0),
        ..FilterState::default()
    };

    let visible = apply(&ranchi, &filters);
    let names: Vec<&str> = visible.iter().map(|h| h.main_info.as_str()).collect();
    assert_eq!(names, vec!["Hotel Yuvraj Palace"]);
    assert!(visible
        .iter()
        .all(|h| h.price <= Decimal::from(4000) && h.rating >= 4.0));
}

#[test]
fn test_lowering_price_ceiling_never_grows_result() {
    let set = hotels();
    let mut previous = usize::MAX;
    for ceiling in [10_000, 5000, 4500, 4000, 3500, 3000, 2500, 1000, 0] {
        let filters = FilterState {
            price_max: Some(Decimal::from(ceiling)),
            ..FilterState::default()
        };
        let size = apply(&set, &filters).len();
        assert!(size <= previous, "ceiling {} grew the set", ceiling);
        previous = size;
    }
    assert_eq!(previous, 0);
}

#[test]
fn test_unknown_sort_key_keeps_input_order() {
    let set = hotels();
    let filters = FilterState {
        sort_by: SortOption::from_key("distance"),
        ..FilterState::default()
    };
    assert_eq!(ids(&apply(&set, &filters)), ids(&set.items));
}

#[test]
fn test_sort_orders() {
    let set = hotels();

    let by = |sort: SortOption| {
        apply(
            &set,
            &FilterState {
                sort_by: sort,
                ..FilterState::default()
            },
        )
    };

    let asc = by(SortOption::PriceAsc);
    assert!(asc.windows(2).all(|w| w[0].price <= w[1].price));

    let desc = by(SortOption::PriceDesc);
    assert!(desc.windows(2).all(|w| w[0].price >= w[1].price));

    let rating = by(SortOption::RatingDesc);
    assert!(rating.windows(2).all(|w| w[0].rating >= w[1].rating));

    let popular = by(SortOption::Popularity);
    assert!(popular.windows(2).all(|w| w[0].review_count >= w[1].review_count));
}

#[test]
fn test_equal_prices_keep_input_order() {
    // Hotel Yuvraj Palace and Prabhat Vihar Hotel both cost 2500
    let set = hotels();
    let sorted = apply(
        &set,
        &FilterState {
            sort_by: SortOption::PriceAsc,
            ..FilterState::default()
        },
    );
    let pos = |name: &str| sorted.iter().position(|h| h.main_info == name).unwrap();
    assert!(pos("Hotel Yuvraj Palace") < pos("Prabhat Vihar Hotel"));
}

#[test]
fn test_discount_sort_puts_biggest_markdown_first() {
    let mut products = ProductsTable::select("");
    sort_results(&mut products, SortOption::Discount);
    assert_eq!(products[0].main_info, "Santal Tribe Cotton Saree");
    assert!(products.windows(2).all(|w| w[0].discount() >= w[1].discount()));
}

#[test]
fn test_destination_filter_matches_location_substring() {
    let filters = FilterState {
        destination: Some("jamshed".to_string()),
        ..FilterState::default()
    };
    let visible = apply(&hotels(), &filters);
    assert_eq!(visible.len(), 2);
    assert!(visible.iter().all(|h| h.location == "Jamshedpur"));
}

#[test]
fn test_category_filter_and_sentinel() {
    let cars: ResultSet = CarsTable::select("").into();
    let suv = FilterState {
        category: Some("suv".to_string()),
        ..FilterState::default()
    };
    assert_eq!(apply(&cars, &suv).len(), 1);

    let all = FilterState {
        category: Some("all".to_string()),
        ..FilterState::default()
    };
    assert_eq!(apply(&cars, &all).len(), 3);
}

#[test]
fn test_marketplace_facets_combine_with_and() {
    let catalog: ResultSet = ProductsTable::select("").into();
    let filters = FilterState {
        destination: Some("Dumka".to_string()),
        budget: BudgetRange::Premium,
        ..FilterState::default()
    };
    let names: Vec<String> = apply(&catalog, &filters)
        .into_iter()
        .map(|p| p.main_info)
        .collect();
    assert_eq!(names, vec!["Santal Tribe Cotton Saree"]);

    let filters = FilterState {
        search_term: Some("WATERPROOF".to_string()),
        ..FilterState::default()
    };
    assert_eq!(apply(&catalog, &filters).len(), 2);
}

#[test]
fn test_nothing_matches_is_empty_not_error() {
    let filters = FilterState {
        min_rating: Some(5.1),
        ..FilterState::default()
    };
    assert!(apply(&hotels(), &filters).is_empty());
    assert!(apply(&ResultSet::default(), &FilterState::default()).is_empty());
}
