//! Route definitions for directors.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{director, pages};
use crate::state::AppState;

/// Routes mounted at `/directores`.
///
/// ```text
/// GET    /                   -> list (?active=)
/// POST   /                   -> create (JSON or multipart)
/// GET    /historico          -> list_inactive
/// GET    /page               -> directors_page
/// POST   /restaurar/{key}    -> restore
/// GET    /{key}              -> get_by_key
/// PUT    /{key}              -> update
/// DELETE /{key}              -> delete
/// POST   /{key}              -> director_action (_method form)
/// GET    /{key}/peliculas    -> list_films
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(director::list).post(director::create))
        .route("/historico", get(director::list_inactive))
        .route("/page", get(pages::directors_page))
        .route("/restaurar/{key}", post(director::restore))
        .route(
            "/{key}",
            get(director::get_by_key)
                .put(director::update)
                .delete(director::delete)
                .post(pages::director_action),
        )
        .route("/{key}/peliculas", get(director::list_films))
}
