//! Route definitions for search.

use axum::routing::get;
use axum::Router;

use crate::handlers::{pages, search};
use crate::state::AppState;

/// Routes mounted at `/buscar`.
///
/// ```text
/// GET /       -> search (?q=, JSON)
/// GET /page   -> search_page (?q=, HTML)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(search::search))
        .route("/page", get(pages::search_page))
}
