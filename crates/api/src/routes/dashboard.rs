//! Route definitions for the dashboard.

use axum::routing::get;
use axum::Router;

use crate::handlers::{dashboard, pages};
use crate::state::AppState;

/// Routes mounted at `/dashboard`.
///
/// ```text
/// GET /       -> get_stats (JSON)
/// GET /page   -> dashboard_page (HTML)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::get_stats))
        .route("/page", get(pages::dashboard_page))
}
