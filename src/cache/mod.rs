//! Search result caching
//!
//! Keys include the store revision, so an insert makes every earlier
//! entry unreachable and a hit always matches what a fresh ranking of
//! the current snapshot would return.

use crate::articles::Article;
use crate::search::SearchQuery;
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;

/// Cache for ranked search results
#[derive(Clone)]
pub struct ResultCache {
    cache: Cache<String, Arc<Vec<Article>>>,
}

impl ResultCache {
    /// Create a new result cache with specified TTL
    pub fn new(ttl_seconds: u64, max_capacity: u64) -> Self {
        let cache = Cache::builder()
            .time_to_live(Duration::from_secs(ttl_seconds))
            .max_capacity(max_capacity)
            .build();

        Self { cache }
    }

    /// Get cached results for a query at a given revision
    pub async fn get(&self, revision: u64, query: &SearchQuery) -> Option<Arc<Vec<Article>>> {
        self.cache.get(&query_cache_key(revision, query)).await
    }

    /// Store results for a query at a given revision
    pub async fn set(&self, revision: u64, query: &SearchQuery, results: Arc<Vec<Article>>) {
        self.cache.insert(query_cache_key(revision, query), results).await;
    }

    /// Number of cached result sets
    pub async fn size(&self) -> u64 {
        // entry_count lags behind inserts until pending work is applied
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new(300, 10_000) // 5 minutes TTL, 10k max entries
    }
}

/// Generate a cache key for a query against a store revision
pub fn query_cache_key(revision: u64, query: &SearchQuery) -> String {
    use sha2::{Digest, Sha256};

    let mut hasher = Sha256::new();
    hasher.update(revision.to_be_bytes());
    hasher.update(query.as_str().as_bytes());

    let digest = hasher.finalize();
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}
