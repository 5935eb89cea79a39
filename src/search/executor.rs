//! Search execution against the article store

use super::models::SearchQuery;
use super::ranking;
use crate::articles::{Article, ArticleStore};
use crate::cache::ResultCache;
use crate::metrics::Metrics;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Runs queries against snapshots of an [`ArticleStore`]
pub struct Search {
    /// Read-only data source
    store: Arc<ArticleStore>,
    /// Optional result cache
    cache: Option<ResultCache>,
    metrics: Arc<Metrics>,
}

impl Search {
    /// Create a new search executor without a cache
    pub fn new(store: Arc<ArticleStore>, metrics: Arc<Metrics>) -> Self {
        Self {
            store,
            cache: None,
            metrics,
        }
    }

    /// Set the result cache
    pub fn with_cache(mut self, cache: ResultCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Rank the current store contents against `query`
    pub async fn execute(&self, query: &SearchQuery) -> Vec<Article> {
        let start = Instant::now();

        if let Some(cache) = &self.cache {
            let revision = self.store.revision();
            if let Some(cached) = cache.get(revision, query).await {
                debug!(%query, revision, results = cached.len(), "Search served from cache");
                self.metrics.record_cache_hit();
                self.metrics.record_search(elapsed_us(start));
                return cached.to_vec();
            }
        }

        // Inserts may land after the lookup; results are keyed by the
        // revision the snapshot was actually taken at
        let (revision, articles) = self.store.snapshot();
        let results = ranking::search(&articles, query);
        debug!(
            %query,
            revision,
            scanned = articles.len(),
            results = results.len(),
            "Search completed"
        );

        if let Some(cache) = &self.cache {
            cache.set(revision, query, Arc::new(results.clone())).await;
        }

        self.metrics.record_search(elapsed_us(start));
        results
    }

    /// Number of cached result sets, if caching is enabled
    pub async fn cache_entries(&self) -> Option<u64> {
        match &self.cache {
            Some(cache) => Some(cache.size().await),
            None => None,
        }
    }
}

fn elapsed_us(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::articles::NewArticle;

    fn query(q: &str) -> SearchQuery {
        SearchQuery::new(q).unwrap()
    }

    fn setup(cache: bool) -> (Arc<ArticleStore>, Arc<Metrics>, Search) {
        let store = Arc::new(ArticleStore::new());
        let metrics = Arc::new(Metrics::new());
        let mut search = Search::new(store.clone(), metrics.clone());
        if cache {
            search = search.with_cache(ResultCache::default());
        }
        (store, metrics, search)
    }

    #[tokio::test]
    async fn test_execute_ranks_store_contents() {
        let (store, _, search) = setup(false);
        store.insert(NewArticle::new("Python Tips", "Python rocks"));
        store.insert(NewArticle::new("Go Basics", "Learn Go. Go is fast."));

        let results = search.execute(&query("Go")).await;
        assert_eq!(results.iter().map(|a| a.id).collect::<Vec<_>>(), vec![2]);
    }

    #[tokio::test]
    async fn test_cache_hit_recorded() {
        let (store, metrics, search) = setup(true);
        store.insert(NewArticle::new("Go Basics", "Learn Go."));

        let first = search.execute(&query("Go")).await;
        let second = search.execute(&query("Go")).await;

        assert_eq!(first, second);
        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.searches, 2);
        assert_eq!(snapshot.cache_hits, 1);
    }

    #[tokio::test]
    async fn test_miss_is_cached_at_current_revision() {
        let (store, _, search) = setup(true);
        store.insert(NewArticle::new("Go Basics", "Learn Go."));
        assert_eq!(search.cache_entries().await, Some(0));

        search.execute(&query("Go")).await;
        assert_eq!(search.cache_entries().await, Some(1));

        store.insert(NewArticle::new("Rust", "Rust"));
        search.execute(&query("Go")).await;
        // One entry per revision the query ran at
        assert_eq!(search.cache_entries().await, Some(2));
    }

    #[tokio::test]
    async fn test_no_cache_entries_without_cache() {
        let (_, _, search) = setup(false);
        search.execute(&query("Go")).await;
        assert_eq!(search.cache_entries().await, None);
    }

    #[tokio::test]
    async fn test_insert_is_visible_despite_cache() {
        let (store, metrics, search) = setup(true);
        store.insert(NewArticle::new("Go Basics", "Learn Go."));
        assert_eq!(search.execute(&query("Go")).await.len(), 1);

        store.insert(NewArticle::new("More Go", "Go Go"));
        let results = search.execute(&query("Go")).await;

        assert_eq!(results.iter().map(|a| a.id).collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(metrics.snapshot().cache_hits, 0);
    }
}
