use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use nd_core::models::{InferenceProvider, SummaryModel, ZeroShotModel};
use nd_core::{Error, Result};

pub const ZERO_SHOT_MODEL: &str = "MoritzLaurer/mDeBERTa-v3-base-mnli-xnli";
pub const SUMMARY_MODEL: &str = "sshleifer/distilbart-cnn-12-6";

const INFERENCE_API_URL: &str = "https://api-inference.huggingface.co";
// Cold model loads on the hosted API can take a while.
const MODEL_TIMEOUT: Duration = Duration::from_secs(120);

/// One hosted model behind the Hugging Face Inference API.
struct HfEndpoint {
    client: Client,
    endpoint: Url,
    api_token: Option<String>,
}

impl HfEndpoint {
    fn new(base_url: &str, model: &str, api_token: Option<String>) -> Result<Self> {
        let client = Client::builder().timeout(MODEL_TIMEOUT).build()?;
        let endpoint = Url::parse(base_url)
            .and_then(|base| base.join(&format!("models/{}", model)))
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", base_url, e)))?;
        Ok(Self {
            client,
            endpoint,
            api_token,
        })
    }

    async fn post<B, R>(&self, body: &B) -> Result<R>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let mut request = self.client.post(self.endpoint.clone()).json(body);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?.error_for_status()?;
        Ok(response.json().await?)
    }
}

#[derive(Serialize)]
struct ZeroShotRequest<'a> {
    inputs: &'a str,
    parameters: ZeroShotParameters<'a>,
}

#[derive(Serialize)]
struct ZeroShotParameters<'a> {
    candidate_labels: &'a [String],
}

#[derive(Deserialize)]
struct ZeroShotResponse {
    labels: Vec<String>,
}

pub struct HfZeroShot {
    endpoint: HfEndpoint,
}

#[async_trait]
impl ZeroShotModel for HfZeroShot {
    async fn classify(&self, text: &str, labels: &[String]) -> Result<Vec<String>> {
        let response: ZeroShotResponse = self
            .endpoint
            .post(&ZeroShotRequest {
                inputs: text,
                parameters: ZeroShotParameters {
                    candidate_labels: labels,
                },
            })
            .await?;
        Ok(response.labels)
    }
}

#[derive(Serialize)]
struct SummaryRequest<'a> {
    inputs: &'a str,
    parameters: SummaryParameters,
}

#[derive(Serialize)]
struct SummaryParameters {
    max_length: usize,
    min_length: usize,
    do_sample: bool,
}

#[derive(Deserialize)]
struct SummaryResponse {
    summary_text: String,
}

pub struct HfSummarizer {
    endpoint: HfEndpoint,
}

#[async_trait]
impl SummaryModel for HfSummarizer {
    async fn summarize(
        &self,
        text: &str,
        max_length: usize,
        min_length: usize,
    ) -> Result<String> {
        let response: Vec<SummaryResponse> = self
            .endpoint
            .post(&SummaryRequest {
                inputs: text,
                parameters: SummaryParameters {
                    max_length,
                    min_length,
                    do_sample: false,
                },
            })
            .await?;
        response
            .into_iter()
            .next()
            .map(|r| r.summary_text)
            .ok_or_else(|| Error::Inference("summarizer returned no output".to_string()))
    }
}

/// Builds the two fixed hosted models on demand.
pub struct HfProvider {
    base_url: String,
    api_token: Option<String>,
}

impl HfProvider {
    pub fn new(api_token: Option<String>) -> Self {
        Self::with_base_url(INFERENCE_API_URL, api_token)
    }

    pub fn with_base_url(base_url: impl Into<String>, api_token: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_token,
        }
    }
}

impl InferenceProvider for HfProvider {
    fn classifier(&self) -> Result<Arc<dyn ZeroShotModel>> {
        Ok(Arc::new(HfZeroShot {
            endpoint: HfEndpoint::new(&self.base_url, ZERO_SHOT_MODEL, self.api_token.clone())?,
        }))
    }

    fn summarizer(&self) -> Result<Arc<dyn SummaryModel>> {
        Ok(Arc::new(HfSummarizer {
            endpoint: HfEndpoint::new(&self.base_url, SUMMARY_MODEL, self.api_token.clone())?,
        }))
    }
}
