//! In-memory article store

use super::models::{Article, NewArticle};
use crate::error::{ArticleError, Result};
use chrono::Utc;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

/// Append-only article collection.
///
/// Inserts take the write lock for both id assignment and the push, so
/// ids are gap-free in insertion order and readers only ever see fully
/// built articles.
#[derive(Debug)]
pub struct ArticleStore {
    inner: RwLock<Inner>,
}

#[derive(Debug)]
struct Inner {
    /// Articles in insertion order
    articles: Vec<Article>,
    /// Id handed to the next insert
    next_id: u64,
}

impl Inner {
    fn revision(&self) -> u64 {
        self.next_id - 1
    }
}

impl Default for ArticleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ArticleStore {
    /// Create an empty store; the first article gets id 1
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                articles: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Insert an article, stamping its id and creation time
    pub fn insert(&self, new: NewArticle) -> Article {
        let mut inner = self.write();

        let article = Article {
            id: inner.next_id,
            title: new.title,
            content: new.content,
            tags: new.tags,
            created_at: Utc::now(),
        };
        inner.next_id += 1;
        inner.articles.push(article.clone());

        debug!(id = article.id, tags = article.tags.len(), "Inserted article");
        article
    }

    /// Look up an article by id
    pub fn get(&self, id: u64) -> Result<Article> {
        let inner = self.read();
        // Ids are dense and start at 1, so the id doubles as a position
        id.checked_sub(1)
            .and_then(|idx| usize::try_from(idx).ok())
            .and_then(|idx| inner.articles.get(idx))
            .filter(|article| article.id == id)
            .cloned()
            .ok_or(ArticleError::NotFound(id))
    }

    /// Snapshot of every article in insertion order
    pub fn all(&self) -> Vec<Article> {
        self.read().articles.clone()
    }

    /// Number of stored articles
    pub fn len(&self) -> usize {
        self.read().articles.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of inserts so far; changes whenever the collection does
    pub fn revision(&self) -> u64 {
        self.read().revision()
    }

    /// Snapshot together with the revision it was taken at
    pub(crate) fn snapshot(&self) -> (u64, Vec<Article>) {
        let inner = self.read();
        (inner.revision(), inner.articles.clone())
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn new_article(title: &str) -> NewArticle {
        NewArticle::new(title, format!("{} content", title))
    }

    #[test]
    fn test_ids_are_sequential() {
        let store = ArticleStore::new();
        let ids: Vec<u64> = (0..5)
            .map(|i| store.insert(new_article(&format!("a{}", i))).id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(store.revision(), 5);
    }

    #[test]
    fn test_insert_then_get() {
        let store = ArticleStore::new();
        let created = store.insert(NewArticle::new("Go Basics", "Learn Go.").with_tags(["go"]));

        let fetched = store.get(created.id).unwrap();
        assert_eq!(fetched.title, "Go Basics");
        assert_eq!(fetched.content, "Learn Go.");
        assert_eq!(fetched.tags, vec!["go".to_string()]);
        assert_eq!(fetched, created);
    }

    #[test]
    fn test_get_unknown_id() {
        let store = ArticleStore::new();
        store.insert(new_article("one"));
        store.insert(new_article("two"));

        assert!(matches!(store.get(0), Err(ArticleError::NotFound(0))));
        assert!(matches!(store.get(3), Err(ArticleError::NotFound(3))));
        assert!(matches!(store.get(999), Err(ArticleError::NotFound(999))));
        assert!(matches!(store.get(u64::MAX), Err(ArticleError::NotFound(_))));
    }

    #[test]
    fn test_all_is_a_snapshot() {
        let store = ArticleStore::new();
        store.insert(new_article("first"));
        let snapshot = store.all();

        store.insert(new_article("second"));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.all().len(), 2);
        assert_eq!(store.all()[1].title, "second");
    }

    #[test]
    fn test_empty_store() {
        let store = ArticleStore::default();
        assert!(store.is_empty());
        assert_eq!(store.revision(), 0);
        assert!(store.all().is_empty());
    }

    #[test]
    fn test_concurrent_inserts_are_gap_free() {
        let store = Arc::new(ArticleStore::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for i in 0..25 {
                        store.insert(new_article(&format!("t{}-{}", t, i)));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let ids: Vec<u64> = store.all().iter().map(|a| a.id).collect();
        assert_eq!(ids, (1..=200).collect::<Vec<u64>>());
    }
}
