// web_app/api/recommend.rs - Debounced recommendation fetcher
//
// Facet changes are debounced before one generative-text request is made for
// the settled facet key. Replies are cached per key for the session and used
// only to move matching products to the front of the list.
//
// The transitions live in `DebounceMachine`, which knows nothing about
// timers or tasks. `RecommendationFetcher` drives it from tokio.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::web_app::api::config::AppConfig;
use crate::web_app::api::genai::{GeminiClient, TextGenerator};
use crate::web_app::errors::FetchError;
use crate::web_app::model::{FacetKey, SearchResult};

/// Substituted when the recommendation request fails
pub const FALLBACK_RECOMMENDATIONS: [&str; 5] = [
    "🎒 Trekking Backpack - Essential for Jharkhand's varied terrain",
    "☔ Monsoon Raincoat - Must-have for heavy monsoon season",
    "🧵 Khadi Kurta - Comfortable local clothing for cultural visits",
    "🍯 Thekua Sweet - Authentic Jharkhand festival delicacy",
    "🎨 Tribal Crafts - Beautiful souvenirs from local artisans",
];

pub fn fallback_recommendations() -> Vec<String> {
    FALLBACK_RECOMMENDATIONS.iter().map(|s| s.to_string()).collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecommendationState {
    #[default]
    Idle,
    /// Timer armed, waiting for the facets to settle
    Pending,
    Fetching,
    Done,
    /// Request failed; the fallback list is shown
    Failed,
}

impl RecommendationState {
    /// Done and Failed both count as finished for display
    pub fn is_settled(&self) -> bool {
        matches!(self, RecommendationState::Done | RecommendationState::Failed)
    }
}

/// Session cache of replies by facet key. Append-only.
#[derive(Clone, Debug, Default)]
pub struct RecommendationCache {
    entries: HashMap<FacetKey, Vec<String>>,
}

impl RecommendationCache {
    pub fn get(&self, key: &FacetKey) -> Option<&Vec<String>> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: FacetKey, recommendations: Vec<String>) {
        self.entries.insert(key, recommendations);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// What the driver must do after a facet change
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DebounceAction {
    /// All facets cleared; drop recommendations
    Clear,
    /// Cached reply available; show it without fetching
    UseCached,
    /// Start a quiet-period timer tagged with this generation
    Arm(u64),
}

/// Idle → Pending → Fetching → Done | Failed, with a generation counter as
/// the cancellation token. Every facet change bumps the generation, so a
/// timer or fetch carrying an older generation is stale.
#[derive(Clone, Debug, Default)]
pub struct DebounceMachine {
    state: RecommendationState,
    generation: u64,
    key: FacetKey,
}

impl DebounceMachine {
    pub fn state(&self) -> RecommendationState {
        self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn key(&self) -> &FacetKey {
        &self.key
    }

    pub fn on_key_change(&mut self, key: FacetKey, cache_hit: bool) -> DebounceAction {
        self.generation += 1;
        self.key = key;

        if self.key.is_empty() {
            self.state = RecommendationState::Idle;
            DebounceAction::Clear
        } else if cache_hit {
            self.state = RecommendationState::Done;
            DebounceAction::UseCached
        } else {
            self.state = RecommendationState::Pending;
            DebounceAction::Arm(self.generation)
        }
    }

    /// Timer expiry. Returns the key to fetch when the timer is still current.
    pub fn on_timer(&mut self, generation: u64) -> Option<FacetKey> {
        if generation != self.generation || self.state != RecommendationState::Pending {
            return None;
        }
        self.state = RecommendationState::Fetching;
        Some(self.key.clone())
    }

    /// Fetch completion. Returns false for a stale fetch, whose reply must
    /// not be shown.
    pub fn on_fetch_complete(&mut self, generation: u64, succeeded: bool) -> bool {
        if generation != self.generation || self.state != RecommendationState::Fetching {
            return false;
        }
        self.state = if succeeded {
            RecommendationState::Done
        } else {
            RecommendationState::Failed
        };
        true
    }
}

pub fn recommendation_prompt(key: &FacetKey) -> String {
    let or = |value: &str, default: &str| {
        let value = value.trim();
        if value.is_empty() {
            default.to_string()
        } else {
            value.to_string()
        }
    };
    format!(
        "As a Jharkhand travel expert, suggest 3-5 products for:\n\
         Destination: {}\n\
         Duration: {} days\n\
         Budget: {}\n\
         Interest: {}\n\n\
         Categories: Travel essentials, Handloom, Tribal crafts, Regional sweets.\n\
         Give brief recommendations (1-2 lines each) focusing on Jharkhand specialties.",
        or(&key.destination, "Any location"),
        or(&key.duration, "flexible"),
        key.budget,
        or(&key.search_term, "general travel"),
    )
}

/// One recommendation per non-blank line
pub fn parse_recommendations(reply: &str) -> Vec<String> {
    reply
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// True when a recommendation line mentions the product's name or a tag
pub fn is_recommended(product: &SearchResult, recommendations: &[String]) -> bool {
    let name = product.main_info.to_lowercase();
    let tags: Vec<String> = product
        .tags
        .iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect();

    recommendations.iter().any(|rec| {
        let rec = rec.to_lowercase();
        (!name.is_empty() && rec.contains(&name)) || tags.iter().any(|t| rec.contains(t.as_str()))
    })
}

/// Move recommended products to the front. Relative order is kept within
/// both groups and nothing is removed.
pub fn rerank_by_recommendations(
    products: Vec<SearchResult>,
    recommendations: &[String],
) -> Vec<SearchResult> {
    if recommendations.is_empty() {
        return products;
    }
    let (mut front, back): (Vec<_>, Vec<_>) = products
        .into_iter()
        .partition(|p| is_recommended(p, recommendations));
    front.extend(back);
    front
}

struct Shared {
    machine: DebounceMachine,
    cache: RecommendationCache,
    recommendations: Vec<String>,
    timer: Option<JoinHandle<()>>,
}

struct Inner<G> {
    generator: G,
    window: Duration,
    shared: Mutex<Shared>,
}

impl<G> Inner<G> {
    fn lock(&self) -> MutexGuard<'_, Shared> {
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Tokio driver for `DebounceMachine`.
///
/// `set_facets` must be called from within a tokio runtime. Cloning shares
/// the same state.
pub struct RecommendationFetcher<G> {
    inner: Arc<Inner<G>>,
}

impl<G> Clone for RecommendationFetcher<G> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<G: TextGenerator + 'static> RecommendationFetcher<G> {
    pub fn new(generator: G, window: Duration) -> Self {
        Self {
            inner: Arc::new(Inner {
                generator,
                window,
                shared: Mutex::new(Shared {
                    machine: DebounceMachine::default(),
                    cache: RecommendationCache::default(),
                    recommendations: Vec::new(),
                    timer: None,
                }),
            }),
        }
    }

    /// Quiet period before a fetch fires
    pub fn window(&self) -> Duration {
        self.inner.window
    }

    pub fn state(&self) -> RecommendationState {
        self.inner.lock().machine.state()
    }

    /// Recommendations for the current facet key
    pub fn recommendations(&self) -> Vec<String> {
        self.inner.lock().recommendations.clone()
    }

    pub fn cached(&self, key: &FacetKey) -> Option<Vec<String>> {
        self.inner.lock().cache.get(key).cloned()
    }

    pub fn set_facets(&self, key: FacetKey) {
        let mut shared = self.inner.lock();
        let was_pending = shared.machine.state() == RecommendationState::Pending;
        let cache_hit = shared.cache.get(&key).cloned();

        // An in-flight fetch is left to finish; only an unexpired timer is cancelled
        if was_pending {
            if let Some(timer) = shared.timer.take() {
                timer.abort();
            }
        }

        match shared.machine.on_key_change(key, cache_hit.is_some()) {
            DebounceAction::Clear => {
                shared.recommendations.clear();
            }
            DebounceAction::UseCached => {
                tracing::debug!("Recommendation cache hit for {}", shared.machine.key().cache_key());
                shared.recommendations = cache_hit.unwrap_or_default();
            }
            DebounceAction::Arm(generation) => {
                tracing::debug!(
                    "Recommendation timer armed for {} (generation {})",
                    shared.machine.key().cache_key(),
                    generation
                );
                let inner = Arc::clone(&self.inner);
                shared.timer = Some(tokio::spawn(async move {
                    tokio::time::sleep(inner.window).await;
                    run_fetch(inner, generation).await;
                }));
            }
        }
    }
}

impl RecommendationFetcher<Option<GeminiClient>> {
    /// Gemini-backed fetcher using `RECOMMENDATION_DEBOUNCE_MS` as the quiet
    /// window. Without a Gemini key every fetch yields the fallback list.
    pub fn from_config(config: &AppConfig) -> Result<Self, FetchError> {
        Ok(Self::new(
            GeminiClient::from_config(config)?,
            config.recommendation_debounce,
        ))
    }
}

async fn run_fetch<G: TextGenerator>(inner: Arc<Inner<G>>, generation: u64) {
    let key = {
        let mut shared = inner.lock();
        let Some(key) = shared.machine.on_timer(generation) else {
            return;
        };
        if let Some(hit) = shared.cache.get(&key).cloned() {
            shared.machine.on_fetch_complete(generation, true);
            shared.recommendations = hit;
            return;
        }
        key
    };

    tracing::info!("Fetching recommendations for {}", key.cache_key());
    let reply: Result<Vec<String>, FetchError> = inner
        .generator
        .generate(&recommendation_prompt(&key))
        .await
        .map(|text| parse_recommendations(&text));

    let mut shared = inner.lock();
    match reply {
        Ok(lines) if !lines.is_empty() => {
            shared.cache.insert(key, lines.clone());
            if shared.machine.on_fetch_complete(generation, true) {
                shared.recommendations = lines;
            } else {
                tracing::debug!("Discarding stale recommendations (generation {})", generation);
            }
        }
        other => {
            if let Err(e) = other {
                tracing::warn!("Recommendation request failed, using fallback list: {}", e);
            }
            if shared.machine.on_fetch_complete(generation, false) {
                shared.recommendations = fallback_recommendations();
            }
        }
    }
}
