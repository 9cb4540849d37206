// tests/marketplace_tests.rs - Marketplace page: facets, recommendations, cart

mod common;

use std::time::Duration;

use common::{today, CountingGenerator};
use rust_decimal::Decimal;
use travel_search::web_app::api::config::AppConfig;
use travel_search::web_app::api::genai::TextGenerator;
use travel_search::web_app::api::recommend::{RecommendationFetcher, RecommendationState};
use travel_search::web_app::model::{BudgetRange, SortOption};
use travel_search::web_app::pages::MarketplacePage;

fn page(reply: &str) -> (MarketplacePage<CountingGenerator>, CountingGenerator) {
    let generator = CountingGenerator::replying(reply);
    let recommender = RecommendationFetcher::new(generator.clone(), Duration::from_millis(1500));
    (MarketplacePage::new(recommender), generator)
}

fn names<G: TextGenerator + 'static>(page: &MarketplacePage<G>) -> Vec<String> {
    page.visible().into_iter().map(|p| p.main_info).collect()
}

#[tokio::test(start_paused = true)]
async fn test_recommended_products_move_to_front_without_filtering() {
    let (mut page, generator) = page("☔ Monsoon Raincoat - keeps you dry\n🍯 Thekua for the train ride");
    page.set_destination("Jamshedpur");
    let before = names(&page);
    assert_eq!(page.recommendation_state(), RecommendationState::Pending);

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert_eq!(generator.calls(), 1);

    let after = names(&page);
    assert_eq!(after.len(), before.len());
    assert_eq!(after[0], "Monsoon Raincoat");
    assert_eq!(after[1], "Thekua (Traditional Sweet)");

    // Everything else keeps its relative order
    let rest: Vec<&String> = after[2..].iter().collect();
    let expected: Vec<&String> = before
        .iter()
        .filter(|n| *n != "Monsoon Raincoat" && *n != "Thekua (Traditional Sweet)")
        .collect();
    assert_eq!(rest, expected);
}

#[tokio::test(start_paused = true)]
async fn test_destination_and_budget_filter_catalog() {
    let (mut page, _) = page("");
    assert_eq!(page.visible().len(), 12);

    page.set_destination("Dhanbad");
    assert!(page.visible().iter().all(|p| p.serves_destination("Dhanbad")));

    page.set_budget(BudgetRange::Premium);
    assert_eq!(names(&page), vec!["Dokra Metal Elephant"]);

    page.set_budget(BudgetRange::All);
    page.set_destination("");
    assert_eq!(page.visible().len(), 12);
}

#[tokio::test(start_paused = true)]
async fn test_category_and_sort_do_not_trigger_recommendations() {
    let (mut page, generator) = page("anything");
    page.set_category("handloom");
    page.set_sort(SortOption::PriceAsc);
    tokio::time::sleep(Duration::from_secs(3)).await;

    assert_eq!(generator.calls(), 0);
    assert_eq!(page.recommendation_state(), RecommendationState::Idle);
    assert_eq!(
        names(&page),
        vec!["Traditional Gamcha Towel", "Khadi Cotton Kurta Set", "Santal Tribe Cotton Saree"]
    );

    page.set_category("all");
    assert_eq!(page.visible().len(), 12);
}

#[tokio::test(start_paused = true)]
async fn test_search_term_filters_and_keys_recommendations() {
    let (mut page, generator) = page("Bamboo baskets make light souvenirs");
    page.set_search_term("traditional");
    assert!(page.visible().iter().all(|p| p.matches_term("traditional")));

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert!(generator.last_prompt().unwrap().contains("Interest: traditional"));
    assert_eq!(page.facets().search_term, "traditional");
}

#[tokio::test]
async fn test_category_facets() {
    let (page, _) = page("");
    let facets = page.categories();
    let count = |id: &str| facets.iter().find(|f| f.value == id).map(|f| f.count);
    assert_eq!(count("all"), Some(12));
    assert_eq!(count("travel-essentials"), Some(4));
    assert_eq!(count("handloom"), Some(3));
    assert_eq!(count("tribal-crafts"), Some(3));
    assert_eq!(count("regional-sweets"), Some(2));
}

#[tokio::test]
async fn test_duration_facet_validation() {
    let (mut page, _) = page("");
    page.set_duration("three");
    assert_eq!(
        page.violations(today()),
        vec!["Duration must be a positive number of days".to_string()]
    );
    page.set_duration("3");
    assert!(page.violations(today()).is_empty());
}

#[tokio::test]
async fn test_cart_follows_catalog_prices() {
    let (mut page, _) = page("");
    let catalog = page.visible();
    let backpack = catalog.iter().find(|p| p.id == "1").unwrap().clone();
    let thekua = catalog.iter().find(|p| p.id == "11").unwrap().clone();

    page.cart.add(&backpack);
    page.cart.add(&thekua);
    page.cart.set_quantity("11", 3);
    assert_eq!(page.cart.item_count(), 4);
    assert_eq!(page.cart.total(), Decimal::from(2499 + 3 * 299));

    page.cart.remove("1");
    assert_eq!(page.cart.total(), Decimal::from(897));

    assert!(page.cart.toggle_favorite("8"));
    assert!(page.cart.is_favorite("8"));
}

#[tokio::test(start_paused = true)]
async fn test_page_from_configuration_without_gemini_key() {
    let config = AppConfig {
        recommendation_debounce: Duration::from_millis(400),
        ..AppConfig::default()
    };
    let mut page = MarketplacePage::from_config(&config).unwrap();
    page.set_destination("Jamshedpur");
    tokio::time::sleep(Duration::from_millis(500)).await;

    assert_eq!(page.recommendation_state(), RecommendationState::Failed);
    // The fallback list still drives the re-ranking
    let visible = names(&page);
    assert_eq!(visible[0], "Trekking Backpack 60L");
    assert_eq!(visible[1], "Monsoon Raincoat");
}
