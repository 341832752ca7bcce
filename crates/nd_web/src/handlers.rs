use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::Json;
use tracing::info;

use nd_core::Article;
use nd_inference::enrich_articles;

use crate::render;
use crate::AppState;

const FETCH_ERROR: &str = "Could not fetch news articles. Check API key or network.";

pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let (articles, error) = run_pipeline(&state).await;
    Html(render::index_page(&articles, error))
}

pub async fn list_articles(State(state): State<Arc<AppState>>) -> Json<Vec<Article>> {
    let (articles, _) = run_pipeline(&state).await;
    Json(articles)
}

async fn run_pipeline(state: &AppState) -> (Vec<Article>, Option<&'static str>) {
    let fetched = state.fetcher.fetch(&state.api_key, &state.search).await;
    if fetched.is_empty() {
        return (Vec::new(), Some(FETCH_ERROR));
    }

    info!("Fetched {} articles, processing {}", fetched.len(), state.limit.min(fetched.len()));
    let batch: Vec<Article> = fetched.into_iter().take(state.limit).collect();
    let enriched = enrich_articles(
        state.provider.as_ref(),
        batch,
        &state.categories,
        &state.summary_options,
    )
    .await;

    (enriched, None)
}
