//! Article storage module
//!
//! Owns the canonical article collection and hands out ids.

mod models;
mod store;

pub use models::*;
pub use store::ArticleStore;
