//! Metrics collection module
//!
//! Counts store and search activity and keeps recent search timings.

use serde::Serialize;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

/// Number of search durations kept for the rolling average
const TIMING_WINDOW: usize = 100;

/// Process-wide service counters
pub struct Metrics {
    articles_created: AtomicU64,
    searches: AtomicU64,
    lookups: AtomicU64,
    lookups_not_found: AtomicU64,
    cache_hits: AtomicU64,
    /// Recent search durations in microseconds
    search_times: Mutex<VecDeque<u64>>,
}

impl Metrics {
    /// Create a new metrics instance
    pub fn new() -> Self {
        Self {
            articles_created: AtomicU64::new(0),
            searches: AtomicU64::new(0),
            lookups: AtomicU64::new(0),
            lookups_not_found: AtomicU64::new(0),
            cache_hits: AtomicU64::new(0),
            search_times: Mutex::new(VecDeque::with_capacity(TIMING_WINDOW)),
        }
    }

    pub fn record_article_created(&self) {
        self.articles_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_lookup(&self, found: bool) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        if !found {
            self.lookups_not_found.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a completed search and how long it took
    pub fn record_search(&self, time_us: u64) {
        self.searches.fetch_add(1, Ordering::Relaxed);

        let mut times = self.search_times.lock().unwrap_or_else(PoisonError::into_inner);
        if times.len() >= TIMING_WINDOW {
            times.pop_front();
        }
        times.push_back(time_us);
    }

    /// Average of the recent search durations
    pub fn avg_search_time(&self) -> Option<u64> {
        let times = self.search_times.lock().unwrap_or_else(PoisonError::into_inner);
        if times.is_empty() {
            None
        } else {
            Some(times.iter().sum::<u64>() / times.len() as u64)
        }
    }

    /// Point-in-time copy of every counter
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            articles_created: self.articles_created.load(Ordering::Relaxed),
            searches: self.searches.load(Ordering::Relaxed),
            lookups: self.lookups.load(Ordering::Relaxed),
            lookups_not_found: self.lookups_not_found.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            avg_search_time_us: self.avg_search_time(),
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub articles_created: u64,
    pub searches: u64,
    pub lookups: u64,
    pub lookups_not_found: u64,
    pub cache_hits: u64,
    pub avg_search_time_us: Option<u64>,
}
