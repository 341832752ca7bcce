use std::sync::Arc;

use nd_core::models::InferenceProvider;
use nd_fetcher::{NewsApiFetcher, SearchQuery};
use nd_inference::SummaryOptions;

/// Topic set offered to the classifier on every request.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Technology",
    "Politics",
    "Sports",
    "Business",
    "Science",
    "Entertainment",
    "Health",
    "World",
];

/// How many fetched articles are run through the models per request.
pub const DEFAULT_ARTICLE_LIMIT: usize = 15;

pub struct AppState {
    pub fetcher: NewsApiFetcher,
    pub provider: Arc<dyn InferenceProvider>,
    pub api_key: String,
    pub search: SearchQuery,
    pub categories: Vec<String>,
    pub limit: usize,
    pub summary_options: SummaryOptions,
}

impl AppState {
    pub fn new(fetcher: NewsApiFetcher, provider: Arc<dyn InferenceProvider>, api_key: String) -> Self {
        Self {
            fetcher,
            provider,
            api_key,
            search: SearchQuery::default(),
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            limit: DEFAULT_ARTICLE_LIMIT,
            summary_options: SummaryOptions::default(),
        }
    }
}
