//! HTTP request handlers

use super::state::AppState;
use crate::articles::{Article, NewArticle};
use crate::error::{ArticleError, Result};
use crate::search::SearchQuery;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tracing::{debug, warn};

/// Body of an article creation request
#[derive(Debug, Default, Deserialize)]
pub struct CreateArticleRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl CreateArticleRequest {
    /// Check required fields and build the store input.
    ///
    /// An empty title or content counts as missing.
    pub fn validate(self) -> Result<NewArticle> {
        let title = self.title.filter(|t| !t.is_empty());
        let content = self.content.filter(|c| !c.is_empty());

        match (title, content) {
            (Some(title), Some(content)) => {
                Ok(NewArticle::new(title, content).with_tags(self.tags.unwrap_or_default()))
            }
            _ => Err(ArticleError::missing_fields()),
        }
    }
}

/// Query parameters for search
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    /// Search query
    pub query: Option<String>,
}

/// Article creation handler
pub async fn create_article(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateArticleRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Article>)> {
    let Json(request) = payload.map_err(body_error)?;

    let new_article = request.validate().map_err(|e| {
        debug!("Article validation failed: {}", e);
        e
    })?;

    let article = state.store.insert(new_article);
    state.metrics.record_article_created();

    Ok((StatusCode::CREATED, Json(article)))
}

/// A body sent without a JSON content type carries no fields at all
fn body_error(rejection: JsonRejection) -> ArticleError {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            debug!("Article body without JSON content type");
            ArticleError::missing_fields()
        }
        other => {
            warn!("Rejected article body: {}", other.body_text());
            ArticleError::InvalidBody(other.body_text())
        }
    }
}

/// Search handler
pub async fn search_articles(
    State(state): State<AppState>,
    params: std::result::Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<Article>>> {
    let Query(params) = params.map_err(|rejection| {
        warn!("Rejected search parameters: {}", rejection.body_text());
        ArticleError::InvalidParams(rejection.body_text())
    })?;
    let query = SearchQuery::from_param(params.query)?;
    let results = state.search.execute(&query).await;
    Ok(Json(results))
}

/// Article lookup handler
pub async fn get_article(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Article>> {
    let id: u64 = match raw_id.parse() {
        Ok(id) => id,
        Err(_) => {
            state.metrics.record_lookup(false);
            return Err(ArticleError::UnknownId(raw_id));
        }
    };

    let result = state.store.get(id);
    state.metrics.record_lookup(result.is_ok());
    result.map(Json)
}

/// Health check handler
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "instance": state.instance_name(),
        "version": crate::VERSION
    }))
}

/// Stats handler
pub async fn stats(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "articles": state.store.len(),
        "cache_enabled": state.settings.search.cache_enabled,
        "cache_entries": state.search.cache_entries().await,
        "metrics": state.metrics.snapshot(),
    }))
}
