//! Application state shared across handlers

use crate::articles::ArticleStore;
use crate::cache::ResultCache;
use crate::config::Settings;
use crate::metrics::Metrics;
use crate::search::Search;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// The one article store for this process
    pub store: Arc<ArticleStore>,
    /// Search executor reading from `store`
    pub search: Arc<Search>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    /// Create new application state around an empty store
    pub fn new(settings: Settings) -> Self {
        let store = Arc::new(ArticleStore::new());
        let metrics = Arc::new(Metrics::new());

        let mut search = Search::new(store.clone(), metrics.clone());
        if settings.search.cache_enabled {
            search = search.with_cache(ResultCache::new(
                settings.search.cache_ttl,
                settings.search.cache_capacity,
            ));
        }

        Self {
            settings: Arc::new(settings),
            store,
            search: Arc::new(search),
            metrics,
        }
    }

    /// Get instance name
    pub fn instance_name(&self) -> &str {
        &self.settings.general.instance_name
    }
}
