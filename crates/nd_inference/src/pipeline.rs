use nd_core::models::InferenceProvider;
use nd_core::Article;

use crate::classify::classify_articles;
use crate::summarize::{summarize_articles, SummaryOptions};

/// Runs the classification and summarization stages over an already
/// fetched batch, in that order. Every returned article comes back with
/// both a `category` and a `summary`, real values or sentinels.
pub async fn enrich_articles(
    provider: &dyn InferenceProvider,
    articles: Vec<Article>,
    categories: &[String],
    options: &SummaryOptions,
) -> Vec<Article> {
    let articles = classify_articles(provider, articles, categories).await;
    summarize_articles(provider, articles, options).await
}
