use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::warn;

use nd_core::{Article, Error, Result};

const EVERYTHING_URL: &str = "https://newsapi.org/v2/everything";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Search parameters for one fetch.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub query: String,
    pub language: String,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            query: "world".to_string(),
            language: "en".to_string(),
        }
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    articles: Vec<Article>,
}

/// Client for the NewsAPI `everything` search endpoint.
pub struct NewsApiFetcher {
    client: Client,
    base_url: String,
}

impl NewsApiFetcher {
    pub fn new() -> Result<Self> {
        Self::with_base_url(EVERYTHING_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetches the newest articles matching `search`.
    ///
    /// This is the stage boundary: any failure (network, HTTP status,
    /// malformed body, provider-reported error) collapses to an empty
    /// list with a diagnostic, never an error to the caller.
    pub async fn fetch(&self, api_key: &str, search: &SearchQuery) -> Vec<Article> {
        match self.try_fetch(api_key, search).await {
            Ok(articles) => articles,
            Err(e) => {
                warn!("Failed to fetch news: {}", e);
                Vec::new()
            }
        }
    }

    async fn try_fetch(&self, api_key: &str, search: &SearchQuery) -> Result<Vec<Article>> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("q", search.query.as_str()),
                ("language", search.language.as_str()),
                ("apiKey", api_key),
                ("sortBy", "publishedAt"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: SearchResponse = response.json().await?;
        if body.status != "ok" {
            return Err(Error::Provider(
                body.message
                    .unwrap_or_else(|| "unknown provider error".to_string()),
            ));
        }

        Ok(body.articles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::RawQuery;
    use axum::http::{header, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use std::sync::{Arc, Mutex};

    async fn spawn_server(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/", addr)
    }

    async fn spawn_fixed(status: StatusCode, body: &'static str) -> String {
        let app = Router::new().route(
            "/",
            get(move || async move {
                (status, [(header::CONTENT_TYPE, "application/json")], body)
            }),
        );
        spawn_server(app).await
    }

    const OK_BODY: &'static str = r#"{
        "status": "ok",
        "totalResults": 2,
        "articles": [
            {"title": "Test Article 1", "description": "Desc 1", "content": "Content 1",
             "url": "url1", "publishedAt": "date1"},
            {"title": "Test Article 2", "description": "Desc 2", "content": "Content 2",
             "url": "url2", "publishedAt": "date2"}
        ]
    }"#;

    #[tokio::test]
    async fn fetch_success_copies_fields_verbatim() {
        let base = spawn_fixed(StatusCode::OK, OK_BODY).await;
        let fetcher = NewsApiFetcher::with_base_url(base).unwrap();

        let articles = fetcher.fetch("fake-key", &SearchQuery::default()).await;
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title.as_deref(), Some("Test Article 1"));
        assert_eq!(articles[0].description.as_deref(), Some("Desc 1"));
        assert_eq!(articles[0].content.as_deref(), Some("Content 1"));
        assert_eq!(articles[0].url.as_deref(), Some("url1"));
        assert_eq!(articles[0].published_at.as_deref(), Some("date1"));
        assert_eq!(articles[1].title.as_deref(), Some("Test Article 2"));
    }

    #[tokio::test]
    async fn fetch_sends_search_parameters() {
        let seen = Arc::new(Mutex::new(None::<String>));
        let recorded = seen.clone();
        let app = Router::new().route(
            "/",
            get(move |RawQuery(q): RawQuery| {
                let recorded = recorded.clone();
                async move {
                    *recorded.lock().unwrap() = q;
                    (
                        [(header::CONTENT_TYPE, "application/json")],
                        r#"{"status": "ok", "articles": []}"#,
                    )
                }
            }),
        );
        let base = spawn_server(app).await;

        let fetcher = NewsApiFetcher::with_base_url(base).unwrap();
        let search = SearchQuery {
            query: "technology".to_string(),
            language: "es".to_string(),
        };
        fetcher.fetch("fake-key", &search).await;

        let query = seen.lock().unwrap().clone().unwrap();
        assert!(query.contains("q=technology"));
        assert!(query.contains("language=es"));
        assert!(query.contains("apiKey=fake-key"));
        assert!(query.contains("sortBy=publishedAt"));
    }

    #[tokio::test]
    async fn provider_error_status_yields_empty_list() {
        // NewsAPI reports logical errors with HTTP 200 and status = "error".
        let base = spawn_fixed(
            StatusCode::OK,
            r#"{"status": "error", "code": "apiKeyInvalid",
                "message": "Your API key is invalid or incorrect."}"#,
        )
        .await;
        let fetcher = NewsApiFetcher::with_base_url(base).unwrap();

        let articles = fetcher.fetch("invalid-key", &SearchQuery::default()).await;
        assert!(articles.is_empty());
    }

    #[tokio::test]
    async fn http_error_yields_empty_list() {
        let base = spawn_fixed(StatusCode::INTERNAL_SERVER_ERROR, "{}").await;
        let fetcher = NewsApiFetcher::with_base_url(base).unwrap();

        let articles = fetcher.fetch("fake-key", &SearchQuery::default()).await;
        assert!(articles.is_empty());
    }

    #[tokio::test]
    async fn malformed_body_yields_empty_list() {
        let base = spawn_fixed(StatusCode::OK, "not json at all").await;
        let fetcher = NewsApiFetcher::with_base_url(base).unwrap();

        let articles = fetcher.fetch("fake-key", &SearchQuery::default()).await;
        assert!(articles.is_empty());
    }

    #[tokio::test]
    async fn connection_failure_yields_empty_list() {
        // Nothing listens on this port.
        let fetcher = NewsApiFetcher::with_base_url("http://127.0.0.1:9/").unwrap();

        let articles = fetcher.fetch("fake-key", &SearchQuery::default()).await;
        assert!(articles.is_empty());
    }
}
