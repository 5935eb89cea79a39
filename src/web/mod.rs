//! Web server module
//!
//! The HTTP boundary: validates requests and maps core results and
//! errors onto status codes and JSON bodies.

mod handlers;
mod routes;
mod state;

pub use handlers::{CreateArticleRequest, SearchParams};
pub use routes::create_router;
pub use state::AppState;
