use std::sync::Arc;

use async_trait::async_trait;

use crate::Result;

/// Zero-shot text classification: score `text` against an arbitrary
/// candidate label set.
#[async_trait]
pub trait ZeroShotModel: Send + Sync {
    /// Returns the candidate labels ranked by descending confidence.
    /// An empty ranking is treated by callers as a failed classification.
    async fn classify(&self, text: &str, labels: &[String]) -> Result<Vec<String>>;
}

/// Abstractive summarization with explicit output length bounds.
#[async_trait]
pub trait SummaryModel: Send + Sync {
    async fn summarize(&self, text: &str, max_length: usize, min_length: usize)
        -> Result<String>;
}

/// Hands out model instances to the pipeline stages.
///
/// Stages call this at most once per invocation; a returned error is the
/// "model load failure" case and degrades every article in the batch to
/// the stage's unavailable sentinel. Implementations may memoize a
/// successfully built model process-wide.
pub trait InferenceProvider: Send + Sync {
    fn classifier(&self) -> Result<Arc<dyn ZeroShotModel>>;
    fn summarizer(&self) -> Result<Arc<dyn SummaryModel>>;
}
