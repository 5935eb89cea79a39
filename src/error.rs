//! Error types for the article service
//!
//! The core only ever produces [`ArticleError::NotFound`]. The other
//! variants come from boundary validation, before the core is called.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type alias for article operations
pub type Result<T> = std::result::Result<T, ArticleError>;

#[derive(Error, Debug)]
pub enum ArticleError {
    /// A required field or parameter was missing or empty
    #[error("{0}")]
    Validation(String),

    /// The request body could not be decoded
    #[error("{0}")]
    InvalidBody(String),

    /// The query string could not be decoded
    #[error("{0}")]
    InvalidParams(String),

    #[error("Article not found")]
    NotFound(u64),

    /// A path id that is not an integer, so names no article
    #[error("Article not found")]
    UnknownId(String),
}

impl ArticleError {
    pub fn missing_fields() -> Self {
        Self::Validation("Title and content are required".to_string())
    }

    pub fn missing_query() -> Self {
        Self::Validation("Query parameter is required".to_string())
    }

    /// Convert error to the HTTP status code the boundary reports
    pub fn status_code(&self) -> StatusCode {
        match self {
            ArticleError::Validation(_)
            | ArticleError::InvalidBody(_)
            | ArticleError::InvalidParams(_) => StatusCode::BAD_REQUEST,
            ArticleError::NotFound(_) | ArticleError::UnknownId(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ArticleError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "message": self.to_string() }));
        (status, body).into_response()
    }
}
