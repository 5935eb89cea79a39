//! Search and relevance ranking
//!
//! Filters a snapshot of the article store against a literal query and
//! orders the matches by how often the query occurs in them.

mod executor;
mod models;
mod ranking;

pub use executor::Search;
pub use models::*;
pub use ranking::{count_occurrences, is_match, rank, relevance, search};
