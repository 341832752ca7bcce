use std::sync::Arc;

use nd_core::models::InferenceProvider;
use nd_core::{Error, Result};

pub mod dummy;
pub mod hf;

pub use dummy::{DummyModel, DummyProvider};
pub use hf::HfProvider;

/// Creates an inference provider by name.
///
/// `hf` talks to the Hugging Face Inference API (pass the API token if
/// you have one); `dummy` is a deterministic offline stand-in.
pub fn create_provider(name: &str, api_token: Option<String>) -> Result<Arc<dyn InferenceProvider>> {
    match name {
        "hf" | "huggingface" => Ok(Arc::new(HfProvider::new(api_token))),
        "dummy" => Ok(Arc::new(DummyProvider)),
        other => Err(Error::Config(format!(
            "unknown inference provider: {}",
            other
        ))),
    }
}
