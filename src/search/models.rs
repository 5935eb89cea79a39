//! Search query and result models

use crate::articles::Article;
use crate::error::{ArticleError, Result};
use serde::Serialize;
use std::fmt;

/// A validated search query.
///
/// Always non-empty. The text is used literally: no trimming, no case
/// folding, no pattern syntax.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchQuery {
    query: String,
}

impl SearchQuery {
    /// Validate a raw query, rejecting missing or empty input
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let query = raw.into();
        if query.is_empty() {
            return Err(ArticleError::missing_query());
        }
        Ok(Self { query })
    }

    /// Validate an optional query parameter
    pub fn from_param(param: Option<String>) -> Result<Self> {
        param.map_or_else(|| Err(ArticleError::missing_query()), Self::new)
    }

    pub fn as_str(&self) -> &str {
        &self.query
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.query)
    }
}

/// A matching article paired with its relevance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedArticle {
    pub article: Article,
    /// Occurrences of the query in title plus content
    pub relevance: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_rejected() {
        let err = SearchQuery::new("").unwrap_err();
        assert_eq!(err.to_string(), "Query parameter is required");
    }

    #[test]
    fn test_missing_query_rejected() {
        assert!(matches!(
            SearchQuery::from_param(None),
            Err(ArticleError::Validation(_))
        ));
        assert!(SearchQuery::from_param(Some(String::new())).is_err());
    }

    #[test]
    fn test_query_kept_verbatim() {
        let query = SearchQuery::from_param(Some(" Go ".to_string())).unwrap();
        assert_eq!(query.as_str(), " Go ");
        assert_eq!(query.to_string(), " Go ");
    }
}
