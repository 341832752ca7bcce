pub mod newsapi;

pub use newsapi::{NewsApiFetcher, SearchQuery};

pub mod prelude {
    pub use super::{NewsApiFetcher, SearchQuery};
    pub use nd_core::{Article, Error, Result};
}
