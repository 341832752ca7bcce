use std::sync::Arc;

use async_trait::async_trait;

use nd_core::models::{InferenceProvider, SummaryModel, ZeroShotModel};
use nd_core::Result;

/// Deterministic offline model for tests and the `--model dummy` flag.
///
/// Classification ranks labels by how often they occur in the text
/// (case-insensitive), keeping the caller's order on ties; summarization
/// returns the first `max_length` words.
pub struct DummyModel;

#[async_trait]
impl ZeroShotModel for DummyModel {
    async fn classify(&self, text: &str, labels: &[String]) -> Result<Vec<String>> {
        let haystack = text.to_lowercase();
        let mut ranked: Vec<(usize, &String)> = labels
            .iter()
            .map(|label| {
                let needle = label.to_lowercase();
                (haystack.matches(needle.as_str()).count(), label)
            })
            .collect();
        // Stable sort: ties keep the supplied label order.
        ranked.sort_by(|a, b| b.0.cmp(&a.0));
        Ok(ranked.into_iter().map(|(_, label)| label.clone()).collect())
    }
}

#[async_trait]
impl SummaryModel for DummyModel {
    async fn summarize(
        &self,
        text: &str,
        max_length: usize,
        _min_length: usize,
    ) -> Result<String> {
        let words: Vec<&str> = text.split_whitespace().take(max_length).collect();
        Ok(words.join(" "))
    }
}

pub struct DummyProvider;

impl InferenceProvider for DummyProvider {
    fn classifier(&self) -> Result<Arc<dyn ZeroShotModel>> {
        Ok(Arc::new(DummyModel))
    }

    fn summarizer(&self) -> Result<Arc<dyn SummaryModel>> {
        Ok(Arc::new(DummyModel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> Vec<String> {
        vec![
            "Technology".to_string(),
            "Sports".to_string(),
            "Politics".to_string(),
        ]
    }

    #[tokio::test]
    async fn ranks_mentioned_labels_first() {
        let ranked = DummyModel
            .classify("sports, sports and more sports, with a dash of politics", &labels())
            .await
            .unwrap();
        assert_eq!(ranked[0], "Sports");
        assert_eq!(ranked[1], "Politics");
        assert_eq!(ranked[2], "Technology");
    }

    #[tokio::test]
    async fn keeps_label_order_on_ties() {
        let ranked = DummyModel
            .classify("nothing matches here", &labels())
            .await
            .unwrap();
        assert_eq!(ranked, labels());
    }

    #[tokio::test]
    async fn summary_takes_the_first_words() {
        let summary = DummyModel
            .summarize("one two three four five six", 3, 1)
            .await
            .unwrap();
        assert_eq!(summary, "one two three");
    }

    #[tokio::test]
    async fn provider_always_loads() {
        assert!(DummyProvider.classifier().is_ok());
        assert!(DummyProvider.summarizer().is_ok());
    }
}
