// tests/genai_tests.rs - Gemini client and itinerary planner

mod common;

use common::CountingGenerator;
use mockito::{Matcher, Server};
use reqwest::Client;
use serde_json::json;
use travel_search::web_app::api::config::AppConfig;
use travel_search::web_app::api::genai::{GeminiClient, TextGenerator};
use travel_search::web_app::api::itinerary::{
    generate_itinerary, plan_itinerary, ItineraryError, ItineraryRequest,
};
use travel_search::web_app::FetchError;

fn client(server: &Server) -> GeminiClient {
    GeminiClient::new(Client::new(), "gem-key", server.url(), "gemini-1.5-flash")
}

fn reply_body(text: &str) -> String {
    json!({
        "candidates": [{ "content": { "parts": [{ "text": text }], "role": "model" } }]
    })
    .to_string()
}

fn trip() -> ItineraryRequest {
    ItineraryRequest {
        destination: "Ranchi".to_string(),
        days: Some(2),
        budget: Some(8000),
        members: Some(3),
        interests: vec!["Geo-Tourism".to_string(), "Relaxation".to_string()],
    }
}

#[tokio::test]
async fn test_generate_posts_prompt_and_reads_candidate() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/gemini-1.5-flash:generateContent")
        .match_query(Matcher::UrlEncoded("key".into(), "gem-key".into()))
        .match_body(Matcher::PartialJson(json!({
            "contents": [{ "parts": [{ "text": "Suggest a waterfall" }] }]
        })))
        .with_status(200)
        .with_body(reply_body("Hundru Falls"))
        .create_async()
        .await;

    let text = client(&server).generate("Suggest a waterfall").await.unwrap();
    mock.assert_async().await;
    assert_eq!(text, "Hundru Falls");
}

#[tokio::test]
async fn test_missing_candidate_is_malformed() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", Matcher::Any)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(json!({"candidates": []}).to_string())
        .create_async()
        .await;

    let err = client(&server).generate("hi").await.unwrap_err();
    assert!(matches!(err, FetchError::Malformed(_)));
}

#[tokio::test]
async fn test_http_errors_are_classified() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", Matcher::Any)
        .match_query(Matcher::Any)
        .with_status(403)
        .with_body("{\"error\": {\"message\": \"API key not valid\"}}")
        .create_async()
        .await;

    let err = client(&server).generate("hi").await.unwrap_err();
    assert_eq!(err, FetchError::Auth { status: 403 });
}

#[test]
fn test_from_config_requires_key() {
    let config = AppConfig::default();
    assert!(GeminiClient::from_config(&config).unwrap().is_none());

    let config = AppConfig {
        gemini_api_key: Some("k".to_string()),
        ..AppConfig::default()
    };
    assert!(GeminiClient::from_config(&config).unwrap().is_some());
}

#[tokio::test]
async fn test_itinerary_requires_all_fields() {
    let generator = CountingGenerator::replying("# Trip");
    let mut request = trip();
    request.budget = None;

    let err = generate_itinerary(&generator, &request).await.unwrap_err();
    assert_eq!(err, ItineraryError::MissingFields);
    assert_eq!(err.to_string(), "Please fill in all required fields.");
    assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn test_markdown_itinerary() {
    let generator = CountingGenerator::replying("## Day 1: Arrival\n- Rock Garden");
    let markdown = generate_itinerary(&generator, &trip()).await.unwrap();
    assert!(markdown.starts_with("## Day 1"));

    let prompt = generator.last_prompt().unwrap();
    assert!(prompt.contains("**Destination:** Ranchi"));
    assert!(prompt.contains("**Number of Travelers:** 3"));
    assert!(prompt.contains("Geo-Tourism, Relaxation"));
}

#[tokio::test]
async fn test_structured_plan_parses_fenced_json() {
    let reply = "```json\n{\n  \"overview\": \"Waterfalls and hills\",\n  \"days\": [\n    {\"day\": 1, \"title\": \"Falls\", \"activities\": [\"Hundru Falls\", \"Jonha Falls\"], \"food\": [\"Dhuska\"]},\n    {\"day\": 2, \"title\": \"City\", \"activities\": [\"Rock Garden\"]}\n  ]\n}\n```";
    let generator = CountingGenerator::replying(reply);

    let plan = plan_itinerary(&generator, &trip()).await.unwrap();
    assert_eq!(plan.overview, "Waterfalls and hills");
    assert_eq!(plan.days.len(), 2);
    assert_eq!(plan.days[0].activities, vec!["Hundru Falls", "Jonha Falls"]);
    assert!(plan.days[1].food.is_empty());
    assert!(plan.budget_tips.is_empty());
}

#[tokio::test]
async fn test_prose_reply_to_structured_request_is_a_failure() {
    let generator = CountingGenerator::replying("Here is a lovely plan for you!");
    let err = plan_itinerary(&generator, &trip()).await.unwrap_err();
    assert!(matches!(err, ItineraryError::Generation(FetchError::Malformed(_))));
}

#[tokio::test]
async fn test_generator_failure_surfaces_as_itinerary_error() {
    let generator = CountingGenerator::failing(FetchError::Timeout);
    let err = generate_itinerary(&generator, &trip()).await.unwrap_err();
    assert_eq!(err, ItineraryError::Generation(FetchError::Timeout));
    assert!(err.to_string().starts_with("Failed to generate itinerary."));
}
