use serde::{Deserialize, Serialize};

/// One news article as delivered by the search provider, later enriched
/// by the classification and summarization stages.
///
/// The five provider fields are all optional: the payload omits or nulls
/// them freely and that is data, not an error. `category` and `summary`
/// stay `None` until the corresponding stage has run; afterwards they
/// always hold either a model result or a sentinel string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Article {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}
