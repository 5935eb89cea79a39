//! Literal matching and relevance ordering

use super::models::{RankedArticle, SearchQuery};
use crate::articles::Article;

/// Count non-overlapping occurrences of `needle` in `haystack`,
/// scanning left to right. `needle` is plain text, never a pattern.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

/// Whether an article is a candidate for `query`: a case-sensitive
/// substring of title or content, or an exact tag.
pub fn is_match(article: &Article, query: &SearchQuery) -> bool {
    let q = query.as_str();
    article.title.contains(q) || article.content.contains(q) || article.has_tag(q)
}

/// Occurrences of `query` in title plus occurrences in content.
/// Tags never contribute.
pub fn relevance(article: &Article, query: &SearchQuery) -> usize {
    let q = query.as_str();
    count_occurrences(&article.title, q) + count_occurrences(&article.content, q)
}

/// Filter and score `articles`, most relevant first.
///
/// Equal scores keep their input order, so with a store snapshot as
/// input ties fall back to insertion order.
pub fn rank(articles: &[Article], query: &SearchQuery) -> Vec<RankedArticle> {
    let mut ranked: Vec<RankedArticle> = articles
        .iter()
        .filter(|article| is_match(article, query))
        .map(|article| RankedArticle {
            relevance: relevance(article, query),
            article: article.clone(),
        })
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| b.relevance.cmp(&a.relevance));
    ranked
}

/// [`rank`] without the scores
pub fn search(articles: &[Article], query: &SearchQuery) -> Vec<Article> {
    rank(articles, query).into_iter().map(|r| r.article).collect()
}
