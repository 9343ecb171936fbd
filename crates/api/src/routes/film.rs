//! Route definitions for films and their character links.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{film, pages};
use crate::state::AppState;

/// Routes mounted at `/peliculas`.
///
/// ```text
/// GET    /                           -> list (?active=)
/// POST   /                           -> create (JSON or multipart)
/// GET    /historico                  -> list_inactive
/// GET    /page                       -> films_page
/// POST   /restaurar/{id}             -> restore
/// GET    /{id}                       -> get_by_id (film detail)
/// PUT    /{id}                       -> update
/// DELETE /{id}                       -> delete
/// POST   /{id}                       -> film_action (_method form)
/// GET    /{id}/personajes            -> list_characters
/// POST   /{id}/personajes/{key}      -> attach_character
/// DELETE /{id}/personajes/{key}      -> detach_character
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(film::list).post(film::create))
        .route("/historico", get(film::list_inactive))
        .route("/page", get(pages::films_page))
        .route("/restaurar/{id}", post(film::restore))
        .route(
            "/{id}",
            get(film::get_by_id)
                .put(film::update)
                .delete(film::delete)
                .post(pages::film_action),
        )
        .route("/{id}/personajes", get(film::list_characters))
        .route(
            "/{id}/personajes/{key}",
            post(film::attach_character).delete(film::detach_character),
        )
}
