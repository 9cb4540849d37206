// bin/api_check.rs - Check the configured travel API end to end
//
// Runs one flight and one hotel search through the full pipeline and
// reports which source answered. Run with `--features cli`.

use anyhow::Result;
use chrono::{Duration, Local};
use travel_search::web_app::api::config::AppConfig;
use travel_search::web_app::model::{FlightQuery, HotelQuery, SearchOutcome, SearchQuery, Source};
use travel_search::web_app::SearchService;

fn main() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async_main())
}

async fn async_main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = AppConfig::from_env();
    println!("Travel API: {}", config.travel_api_base_url);
    println!(
        "  RapidAPI key: {}",
        if config.rapidapi_key.is_some() { "✓ set" } else { "✗ not set (mock data only)" }
    );
    println!(
        "  Gemini key:   {}",
        if config.gemini_api_key.is_some() { "✓ set" } else { "✗ not set" }
    );

    let service = SearchService::from_config(&config);
    if !service.has_remote() {
        println!("  Remote provider unavailable, every search below is served from mock data");
    }
    let today = Local::now().date_naive();
    let date = |days: i64| (today + Duration::days(days)).format("%Y-%m-%d").to_string();

    println!("\nFlight search JFK → LHR:");
    let flights = SearchQuery::Flight(FlightQuery {
        from: "New York".to_string(),
        to: "London".to_string(),
        date: date(14),
    });
    report(service.search(&flights).await?);

    println!("\nHotel search Ranchi:");
    let hotels = SearchQuery::Hotel(HotelQuery {
        destination: "Ranchi".to_string(),
        check_in: date(14),
        check_out: date(16),
    });
    report(service.search(&hotels).await?);

    Ok(())
}

fn report(outcome: SearchOutcome) {
    match outcome.source {
        Source::Remote => println!("✓ Remote provider returned {} results", outcome.results.len()),
        Source::Mock => println!("✗ Served {} mock results", outcome.results.len()),
    }
    if let Some(advisory) = &outcome.advisory {
        println!("  {}", advisory);
    }
    for result in outcome.results.iter().take(5) {
        println!(
            "  - {} | {} | {} | ★{:.1}",
            result.main_info,
            result.sub_info,
            result.price_label(),
            result.rating
        );
    }
}
