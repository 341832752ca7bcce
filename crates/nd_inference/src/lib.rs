pub mod classify;
pub mod models;
pub mod outcome;
pub mod pipeline;
pub mod summarize;
mod text;

pub use classify::classify_articles;
pub use models::{create_provider, DummyProvider, HfProvider};
pub use outcome::Outcome;
pub use pipeline::enrich_articles;
pub use summarize::{summarize_articles, SummaryOptions};

pub mod prelude {
    pub use super::models::create_provider;
    pub use super::{classify_articles, enrich_articles, summarize_articles, SummaryOptions};
    pub use nd_core::models::{InferenceProvider, SummaryModel, ZeroShotModel};
    pub use nd_core::{Article, Error, Result};
}
