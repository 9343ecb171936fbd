//! Route definitions for characters.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{character, pages};
use crate::state::AppState;

/// Routes mounted at `/personajes`.
///
/// ```text
/// GET    /                   -> list (?active=)
/// POST   /                   -> create (JSON or multipart)
/// GET    /historico          -> list_inactive
/// GET    /page               -> characters_page
/// POST   /restaurar/{key}    -> restore
/// GET    /{key}              -> get_by_key
/// PUT    /{key}              -> update
/// DELETE /{key}              -> delete
/// POST   /{key}              -> character_action (_method form)
/// GET    /{key}/peliculas    -> list_films
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(character::list).post(character::create))
        .route("/historico", get(character::list_inactive))
        .route("/page", get(pages::characters_page))
        .route("/restaurar/{key}", post(character::restore))
        .route(
            "/{key}",
            get(character::get_by_key)
                .put(character::update)
                .delete(character::delete)
                .post(pages::character_action),
        )
        .route("/{key}/peliculas", get(character::list_films))
}
