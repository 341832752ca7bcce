use tracing::warn;

use nd_core::models::{InferenceProvider, SummaryModel};
use nd_core::Article;

use crate::outcome::Outcome;
use crate::text::first_non_empty;

/// Output cap kept just under the summarization model's default limit
/// (142 tokens for distilbart-cnn) so the provider never truncates.
const MODEL_OUTPUT_CAP: usize = 140;

#[derive(Debug, Clone)]
pub struct SummaryOptions {
    /// Lower bound on the generated summary length.
    pub min_summary_length: usize,
    /// Upper bound on the summary as a fraction of the source word count.
    pub max_length_ratio: f64,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            min_summary_length: 30,
            max_length_ratio: 0.5,
        }
    }
}

/// Adds a `summary` to every article. Output order and length always
/// equal the input's; failure handling mirrors [`classify_articles`].
///
/// [`classify_articles`]: crate::classify::classify_articles
pub async fn summarize_articles(
    provider: &dyn InferenceProvider,
    mut articles: Vec<Article>,
    options: &SummaryOptions,
) -> Vec<Article> {
    let model = match provider.summarizer() {
        Ok(model) => model,
        Err(e) => {
            warn!("Failed to load summarization model: {}", e);
            for article in &mut articles {
                article.summary = Some(Outcome::Unavailable.summary_text());
            }
            return articles;
        }
    };

    for article in &mut articles {
        let outcome = summarize_one(model.as_ref(), article, options).await;
        article.summary = Some(outcome.summary_text());
    }
    articles
}

async fn summarize_one(
    model: &dyn SummaryModel,
    article: &Article,
    options: &SummaryOptions,
) -> Outcome {
    let text = first_non_empty(&[&article.content, &article.description]);
    if text.trim().is_empty() {
        return Outcome::EmptyInput;
    }

    let word_count = text.split_whitespace().count();
    let (max_length, min_length) = summary_bounds(word_count, options);

    // Too short to usefully condense; hand the source back verbatim.
    if text.chars().count() < min_length * 2 {
        return Outcome::Success(text.to_string());
    }

    match model.summarize(text, max_length, min_length).await {
        Ok(summary) if !summary.is_empty() => Outcome::Success(summary),
        Ok(_) => Outcome::Failed,
        Err(e) => {
            warn!(
                "Failed to summarize article {:?}: {}",
                article.title.as_deref().unwrap_or("Unknown Title"),
                e
            );
            Outcome::Failed
        }
    }
}

/// Computes the `(max_length, min_length)` bounds handed to the model.
///
/// The dynamic maximum scales with the source word count, clamped below
/// by the configured minimum and above by the model cap. The effective
/// minimum then backs off from the maximum so the two never pinch.
fn summary_bounds(word_count: usize, options: &SummaryOptions) -> (usize, usize) {
    let dynamic_max = (word_count as f64 * options.max_length_ratio).round() as usize;
    let max_length = options
        .min_summary_length
        .max(dynamic_max)
        .min(MODEL_OUTPUT_CAP);

    let candidate = if max_length > 40 {
        max_length.saturating_sub(10)
    } else {
        max_length / 2
    };
    let min_length = options.min_summary_length.min(candidate);

    (max_length, min_length)
}
