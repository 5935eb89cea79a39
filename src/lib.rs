//! article-search: an in-memory article store with keyword relevance search
//!
//! Articles are inserted into an [`ArticleStore`] and searched by a
//! literal query. Matches are ranked by how often the query occurs in
//! their title and content.

pub mod articles;
pub mod cache;
pub mod config;
pub mod error;
pub mod metrics;
pub mod search;
pub mod web;

pub use articles::{Article, ArticleStore, NewArticle};
pub use config::Settings;
pub use error::{ArticleError, Result};
pub use search::{Search, SearchQuery};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
