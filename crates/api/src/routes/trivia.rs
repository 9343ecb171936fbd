//! Route definitions for trivia entries.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{pages, trivia};
use crate::state::AppState;

/// Routes mounted at `/curiosidades`.
///
/// ```text
/// GET    /                   -> list (?active=)
/// POST   /                   -> create (film_id or film_title)
/// GET    /historico          -> list_inactive
/// GET    /page               -> trivia_page
/// POST   /restaurar/{id}     -> restore
/// GET    /{id}               -> get_by_id
/// PUT    /{id}               -> update
/// DELETE /{id}               -> delete
/// POST   /{id}               -> trivia_action (_method form)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(trivia::list).post(trivia::create))
        .route("/historico", get(trivia::list_inactive))
        .route("/page", get(pages::trivia_page))
        .route("/restaurar/{id}", post(trivia::restore))
        .route(
            "/{id}",
            get(trivia::get_by_id)
                .put(trivia::update)
                .delete(trivia::delete)
                .post(pages::trivia_action),
        )
}
