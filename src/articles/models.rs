//! Article data models

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A stored article. Fields never change once inserted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Unique id, assigned in insertion order starting at 1
    pub id: u64,
    /// Article title
    pub title: String,
    /// Article body
    pub content: String,
    /// Tags, in the order they were submitted
    #[serde(default)]
    pub tags: Vec<String>,
    /// Insertion time
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
}

impl Article {
    /// Check whether the article carries a tag exactly equal to `tag`
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Input for a store insert.
///
/// Only the boundary builds these, after checking that title and
/// content are present, so the store never re-validates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

impl NewArticle {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            tags: vec![],
        }
    }

    /// Set tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// `createdAt` wire format: `2026-01-02T03:04:05.678Z`
mod iso_millis {
    use super::*;

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Article {
        Article {
            id: 7,
            title: "Go Basics".to_string(),
            content: "Learn Go.".to_string(),
            tags: vec!["go".to_string()],
            created_at: Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap(),
        }
    }

    #[test]
    fn test_wire_format() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["title"], "Go Basics");
        assert_eq!(json["tags"], serde_json::json!(["go"]));
        assert_eq!(json["createdAt"], "2026-01-02T03:04:05.000Z");
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_deserialize_created_at() {
        let json = serde_json::to_string(&sample()).unwrap();
        let parsed: Article = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_has_tag_is_exact() {
        let article = sample();
        assert!(article.has_tag("go"));
        assert!(!article.has_tag("Go"));
        assert!(!article.has_tag("g"));
    }

    #[test]
    fn test_new_article_builder() {
        let new = NewArticle::new("t", "c").with_tags(["a", "b"]);
        assert_eq!(new.tags, vec!["a".to_string(), "b".to_string()]);
        assert!(NewArticle::new("t", "c").tags.is_empty());
    }
}
