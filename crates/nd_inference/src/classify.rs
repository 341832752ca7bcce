use tracing::warn;

use nd_core::models::{InferenceProvider, ZeroShotModel};
use nd_core::Article;

use crate::outcome::Outcome;
use crate::text::{first_non_empty, truncate_chars};

/// Longest text submitted to the classifier, in characters.
pub const MAX_CLASSIFY_CHARS: usize = 512;

/// Assigns a `category` to every article, drawn from `categories`.
///
/// Output order and length always equal the input's. The model is
/// obtained once per call; if that fails the whole batch degrades to the
/// unavailable sentinel, while a runtime failure degrades only the
/// article it happened on.
pub async fn classify_articles(
    provider: &dyn InferenceProvider,
    mut articles: Vec<Article>,
    categories: &[String],
) -> Vec<Article> {
    let model = match provider.classifier() {
        Ok(model) => model,
        Err(e) => {
            warn!("Failed to load classification model: {}", e);
            for article in &mut articles {
                article.category = Some(Outcome::Unavailable.category_text());
            }
            return articles;
        }
    };

    for article in &mut articles {
        let outcome = classify_one(model.as_ref(), article, categories).await;
        article.category = Some(outcome.category_text());
    }
    articles
}

async fn classify_one(
    model: &dyn ZeroShotModel,
    article: &Article,
    categories: &[String],
) -> Outcome {
    let text = first_non_empty(&[&article.description, &article.content, &article.title]);
    if text.trim().is_empty() {
        return Outcome::EmptyInput;
    }
    let text = truncate_chars(text, MAX_CLASSIFY_CHARS);

    match model.classify(text, categories).await {
        Ok(labels) => match labels.into_iter().next() {
            Some(top) => Outcome::Success(top),
            None => Outcome::Failed,
        },
        Err(e) => {
            warn!(
                "Failed to classify article {:?}: {}",
                article.title.as_deref().unwrap_or("Unknown Title"),
                e
            );
            Outcome::Failed
        }
    }
}
