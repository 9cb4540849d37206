// web_app/api/itinerary.rs - AI itinerary planner
//
// Builds the planner prompt from the trip form and asks the text generator
// for either a markdown itinerary or a structured day-by-day plan.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::web_app::api::genai::{parse_json_reply, TextGenerator};
use crate::web_app::errors::FetchError;

pub const INTEREST_OPTIONS: [&str; 5] = [
    "History & Culture",
    "Geo-Tourism",
    "Wildlife & Parks",
    "Adventure & Outdoors",
    "Relaxation",
];

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryRequest {
    pub destination: String,
    pub days: Option<u32>,
    /// Per person in rupees, excluding flights
    pub budget: Option<u32>,
    pub members: Option<u32>,
    pub interests: Vec<String>,
}

impl ItineraryRequest {
    /// Adds the interest if absent, removes it otherwise
    pub fn toggle_interest(&mut self, interest: &str) {
        match self.interests.iter().position(|i| i == interest) {
            Some(pos) => {
                self.interests.remove(pos);
            }
            None => self.interests.push(interest.to_string()),
        }
    }

    fn is_complete(&self) -> bool {
        let positive = |v: Option<u32>| v.is_some_and(|n| n > 0);
        !self.destination.trim().is_empty()
            && positive(self.days)
            && positive(self.budget)
            && positive(self.members)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItineraryError {
    #[error("Please fill in all required fields.")]
    MissingFields,

    #[error("Failed to generate itinerary. Please check your API key and try again.")]
    Generation(#[source] FetchError),
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: u32,
    pub title: String,
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub food: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryPlan {
    pub overview: String,
    pub days: Vec<DayPlan>,
    #[serde(default)]
    pub budget_tips: Vec<String>,
}

pub fn itinerary_prompt(request: &ItineraryRequest) -> String {
    let interests = if request.interests.is_empty() {
        "General sightseeing".to_string()
    } else {
        request.interests.join(", ")
    };
    format!(
        "You are an expert travel planner. Create a detailed and engaging travel itinerary \
         based on the following user preferences.\n\
         The output must be in well-structured Markdown format.\n\n\
         **Travel Details:**\n\
         - **Destination:** {}\n\
         - **Duration:** {} days\n\
         - **Budget (per person, excluding flights):** Approximately {} Rs.\n\
         - **Number of Travelers:** {}\n\
         - **Primary Interests:** {}\n\n\
         **Instructions for Your Response:**\n\
         1. **Overview:** Start with a brief, exciting summary of the trip.\n\
         2. **Day-by-Day Plan:** For each day, provide a clear heading (e.g., \"Day 1: Arrival and Exploration\").\n\
         3. **Activities:** Suggest 2-3 specific activities or sights for each day.\n\
         4. **Food Recommendations:** For each day, suggest a type of local cuisine or a specific restaurant to try.\n\
         5. **Budget Tips:** Weave in practical budget-friendly tips throughout the itinerary.",
        request.destination.trim(),
        request.days.unwrap_or_default(),
        request.budget.unwrap_or_default(),
        request.members.unwrap_or_default(),
        interests,
    )
}

fn structured_prompt(request: &ItineraryRequest) -> String {
    format!(
        "{}\n\nReply with JSON only, no prose, in this shape: \
         {{\"overview\": string, \"days\": [{{\"day\": number, \"title\": string, \
         \"activities\": [string], \"food\": [string]}}], \"budget_tips\": [string]}}",
        itinerary_prompt(request)
            .replace("The output must be in well-structured Markdown format.\n", "")
    )
}

/// Markdown itinerary
pub async fn generate_itinerary<G: TextGenerator>(
    generator: &G,
    request: &ItineraryRequest,
) -> Result<String, ItineraryError> {
    if !request.is_complete() {
        return Err(ItineraryError::MissingFields);
    }
    tracing::info!(
        "Generating {}-day itinerary for {}",
        request.days.unwrap_or_default(),
        request.destination.trim()
    );
    generator
        .generate(&itinerary_prompt(request))
        .await
        .map_err(|e| {
            tracing::error!("Itinerary generation failed: {}", e);
            ItineraryError::Generation(e)
        })
}

/// Day-by-day plan parsed from a JSON reply; a reply that is not the
/// expected JSON is a generation failure
pub async fn plan_itinerary<G: TextGenerator>(
    generator: &G,
    request: &ItineraryRequest,
) -> Result<ItineraryPlan, ItineraryError> {
    if !request.is_complete() {
        return Err(ItineraryError::MissingFields);
    }
    let reply = generator
        .generate(&structured_prompt(request))
        .await
        .map_err(ItineraryError::Generation)?;
    parse_json_reply(&reply).map_err(ItineraryError::Generation)
}
