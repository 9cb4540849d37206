// web_app/pages/marketplace.rs - Marketplace page controller
//
// Destination, duration, budget and search term form the facet key that
// drives recommendations; destination, budget, search term and category
// also filter the catalog. The visible list is the filtered, sorted
// catalog with recommended products moved to the front.

use chrono::NaiveDate;

use crate::fixtures::tables::products::category_facets;
use crate::fixtures::tables::ProductsTable;
use crate::fixtures::MockTable;
use crate::web_app::api::config::AppConfig;
use crate::web_app::api::genai::{GeminiClient, TextGenerator};
use crate::web_app::api::queries;
use crate::web_app::api::recommend::{rerank_by_recommendations, RecommendationFetcher, RecommendationState};
use crate::web_app::api::validate;
use crate::web_app::errors::FetchError;
use crate::web_app::model::{
    BudgetRange, Cart, FacetCount, FacetKey, FilterState, ResultSet, SearchQuery, SearchResult,
    SortOption,
};

pub struct MarketplacePage<G> {
    catalog: ResultSet,
    filters: FilterState,
    facets: FacetKey,
    recommender: RecommendationFetcher<G>,
    pub cart: Cart,
}

impl MarketplacePage<Option<GeminiClient>> {
    pub fn from_config(config: &AppConfig) -> Result<Self, FetchError> {
        Ok(Self::new(RecommendationFetcher::from_config(config)?))
    }
}

impl<G: TextGenerator + 'static> MarketplacePage<G> {
    /// Page over the built-in product catalog
    pub fn new(recommender: RecommendationFetcher<G>) -> Self {
        Self::with_catalog(ProductsTable::select("").into(), recommender)
    }

    pub fn with_catalog(catalog: ResultSet, recommender: RecommendationFetcher<G>) -> Self {
        Self {
            catalog,
            filters: FilterState::default(),
            facets: FacetKey::default(),
            recommender,
            cart: Cart::default(),
        }
    }

    pub fn set_destination(&mut self, destination: &str) {
        self.facets.destination = destination.trim().to_string();
        self.filters.destination = non_blank(destination);
        self.facets_changed();
    }

    /// Trip length in days; affects recommendations only
    pub fn set_duration(&mut self, duration: &str) {
        self.facets.duration = duration.trim().to_string();
        self.facets_changed();
    }

    pub fn set_budget(&mut self, budget: BudgetRange) {
        self.facets.budget = budget;
        self.filters.budget = budget;
        self.facets_changed();
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.facets.search_term = term.trim().to_string();
        self.filters.search_term = non_blank(term);
        self.facets_changed();
    }

    /// Category id, or "all"
    pub fn set_category(&mut self, category: &str) {
        self.filters.category = non_blank(category);
    }

    pub fn set_sort(&mut self, sort: SortOption) {
        self.filters.sort_by = sort;
    }

    fn facets_changed(&mut self) {
        self.recommender.set_facets(self.facets.clone());
    }

    pub fn facets(&self) -> &FacetKey {
        &self.facets
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Facet violations, e.g. a non-numeric duration
    pub fn violations(&self, today: NaiveDate) -> Vec<String> {
        validate::validate(&SearchQuery::Marketplace(self.facets.clone()), today)
    }

    pub fn recommendation_state(&self) -> RecommendationState {
        self.recommender.state()
    }

    pub fn recommendations(&self) -> Vec<String> {
        self.recommender.recommendations()
    }

    /// Recomputed in full from the catalog on every call
    pub fn visible(&self) -> Vec<SearchResult> {
        let filtered = queries::apply(&self.catalog, &self.filters);
        rerank_by_recommendations(filtered, &self.recommender.recommendations())
    }

    pub fn categories(&self) -> Vec<FacetCount> {
        category_facets(&self.catalog.items)
    }

    pub fn catalog(&self) -> &ResultSet {
        &self.catalog
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
