pub mod error;
pub mod models;
pub mod types;

pub use error::Error;
pub use types::Article;
pub type Result<T> = std::result::Result<T, Error>;
